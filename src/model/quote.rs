//! Quote results.

use super::{PartDimension, PlacedPart, Sheet};
use crate::config::Thickness;
use serde::{Deserialize, Serialize};

/// Cheapest sheet for a set of parts, with its one-sheet layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetSelection {
    /// Winning sheet (usable size).
    pub sheet: Sheet,
    /// Placements on a single sheet. Additional sheets repeat this layout.
    pub layout: Vec<PlacedPart>,
    /// Material cost across all sheets.
    pub total_material_cost: u64,
    /// Physical sheets required.
    pub sheets_needed: u64,
}

impl SheetSelection {
    /// Parts that fit on one sheet.
    pub fn parts_per_sheet(&self) -> usize {
        self.layout.len()
    }
}

/// Full quote for a box order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Derived panel sizes for one box.
    pub dimensions: Vec<PartDimension>,
    /// Material thickness.
    pub thickness: Thickness,
    /// Number of boxes quoted.
    pub quantity: u32,
    /// Winning sheet (usable size).
    pub sheet: Sheet,
    /// Placements on a single sheet.
    pub layout: Vec<PlacedPart>,
    /// Physical sheets required.
    pub sheets_needed: u64,
    /// Material cost across all sheets.
    pub total_material_cost: u64,
    /// Labor multiplier applied.
    pub labor_factor: f64,
    /// Material cost including labor.
    pub total_cost: f64,
    /// `total_cost / quantity`.
    pub cost_per_box: f64,
}

impl QuoteResult {
    /// Fraction of the sheets' usable area covered by parts.
    pub fn utilization(&self) -> f64 {
        let sheet_area = self.sheet.area() * self.sheets_needed as f64;
        if sheet_area <= 0.0 {
            return 0.0;
        }
        let parts_area: f64 = self.dimensions.iter().map(|d| d.area()).sum::<f64>()
            * f64::from(self.quantity);
        parts_area / sheet_area
    }
}

/// Yield of one catalog sheet for a flat panel request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelOption {
    /// Supplier name for the size.
    pub sheet_name: String,
    /// Nominal sheet width.
    pub sheet_width: f64,
    /// Nominal sheet height.
    pub sheet_height: f64,
    /// Items across the sheet width.
    pub horizontal: u32,
    /// Items down the sheet height.
    pub vertical: u32,
    /// Items per sheet.
    pub count: u32,
    /// Price of one sheet.
    pub fee: u64,
    /// `fee / count`.
    pub price_per_item: f64,
}
