//! Cheapest stock sheet selection.

use super::fit_parts_on_sheet;
use crate::config::Thickness;
use crate::error::{QuoteError, Result};
use crate::model::{Catalog, PartDimension, SheetSelection};
use tracing::{debug, info, warn};

/// Pick the catalog sheet that makes `quantity` sets of `parts` cheapest.
///
/// Every sheet stocked in `thickness` is probed with [`fit_parts_on_sheet`]
/// to find how many parts one sheet holds; the number of sheets is the part
/// total divided by that capacity, rounded up. The lowest total material
/// cost wins, and on a tie the sheet listed first in the catalog is kept.
///
/// Sheets that cannot hold a single part are skipped. A zero quantity needs
/// no sheets and costs nothing.
///
/// # Errors
///
/// * [`QuoteError::NoSuitableSheet`] if no sheet is stocked in `thickness`.
/// * [`QuoteError::PartsDoNotFit`] if every stocked sheet is too small.
pub fn select_optimal_sheet(
    parts: &[PartDimension],
    thickness: Thickness,
    quantity: u32,
    catalog: &Catalog,
) -> Result<SheetSelection> {
    let total_parts = parts.len() as u64 * u64::from(quantity);
    let mut best: Option<SheetSelection> = None;
    let mut candidates = 0usize;

    for sheet in catalog.usable_sheets(thickness) {
        candidates += 1;

        let layout = fit_parts_on_sheet(parts, &sheet, quantity);
        let parts_per_sheet = layout.len() as u64;

        let sheets_needed = if total_parts == 0 {
            0
        } else if parts_per_sheet == 0 {
            warn!(
                "Sheet {} ({}x{}) cannot hold any part, skipping",
                sheet.name, sheet.width, sheet.height
            );
            continue;
        } else {
            total_parts.div_ceil(parts_per_sheet)
        };

        let total_material_cost = sheet.price.saturating_mul(sheets_needed);

        debug!(
            "Sheet {}: {} part(s) per sheet, {} sheet(s), cost {}",
            sheet.name, parts_per_sheet, sheets_needed, total_material_cost
        );

        let improves = best
            .as_ref()
            .map_or(true, |b| total_material_cost < b.total_material_cost);

        if improves {
            best = Some(SheetSelection {
                sheet,
                layout,
                total_material_cost,
                sheets_needed,
            });
        }
    }

    match best {
        Some(selection) => {
            info!(
                "Selected {} x{} for {} {} part(s), material cost {}",
                selection.sheet.name,
                selection.sheets_needed,
                total_parts,
                thickness,
                selection.total_material_cost
            );
            Ok(selection)
        }
        None if candidates == 0 => Err(QuoteError::NoSuitableSheet { thickness }),
        None => Err(QuoteError::PartsDoNotFit { thickness }),
    }
}
