//! StockSheet/Catalog - Raw material sizes and their prices.

use crate::config::{Thickness, DEFAULT_CUT_LOSS};
use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Catalog shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../../catalog/acrylic_panels.json");

/// A stock sheet size offered by the supplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockSheet {
    /// Supplier name for the size (e.g. "4x8판").
    pub name: String,
    /// Nominal width in mm.
    pub width: f64,
    /// Nominal height in mm.
    pub height: f64,
    /// Price per sheet by thickness. `None` means the size is not stocked in
    /// that thickness.
    #[serde(default)]
    pub fee: BTreeMap<Thickness, Option<u64>>,
}

impl StockSheet {
    /// Create a sheet with an empty fee table.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            fee: BTreeMap::new(),
        }
    }

    /// Builder-style fee entry.
    pub fn with_fee(mut self, thickness: Thickness, fee: Option<u64>) -> Self {
        self.fee.insert(thickness, fee);
        self
    }

    /// Price of one sheet in the given thickness, if stocked.
    pub fn fee_for(&self, thickness: Thickness) -> Option<u64> {
        self.fee.get(&thickness).copied().flatten()
    }

    /// Check if this size is stocked in the given thickness.
    pub fn supports(&self, thickness: Thickness) -> bool {
        self.fee_for(thickness).is_some()
    }

    /// Thicknesses this size is stocked in, thinnest first.
    pub fn thicknesses(&self) -> impl Iterator<Item = Thickness> + '_ {
        self.fee
            .iter()
            .filter(|(_, fee)| fee.is_some())
            .map(|(thickness, _)| *thickness)
    }

    /// Usable sheet for packing, with the cut-loss allowance applied.
    ///
    /// Returns `None` when the size is not stocked in `thickness`.
    pub fn usable(&self, thickness: Thickness, cut_loss: f64) -> Option<Sheet> {
        let price = self.fee_for(thickness)?;
        Some(Sheet {
            name: self.name.clone(),
            width: self.width + cut_loss,
            height: self.height + cut_loss,
            price,
        })
    }
}

/// A stock sheet resolved for one thickness, sized for packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Supplier name for the size.
    pub name: String,
    /// Usable width in mm.
    pub width: f64,
    /// Usable height in mm.
    pub height: f64,
    /// Price of one sheet.
    pub price: u64,
}

impl Sheet {
    /// Create a usable sheet directly.
    pub fn new(name: impl Into<String>, width: f64, height: f64, price: u64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            price,
        }
    }

    /// Usable area in mm².
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Stock sheet catalog, loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Allowance added to each sheet side before packing.
    #[serde(default = "default_cut_loss")]
    pub cut_loss: f64,
    /// Sheets in preference order; earlier entries win price ties.
    pub sheets: Vec<StockSheet>,
}

fn default_cut_loss() -> f64 {
    DEFAULT_CUT_LOSS
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            cut_loss: DEFAULT_CUT_LOSS,
            sheets: Vec::new(),
        }
    }
}

impl Catalog {
    /// Create a catalog from sheets and a cut-loss allowance.
    pub fn new(sheets: Vec<StockSheet>, cut_loss: f64) -> Self {
        Self { cut_loss, sheets }
    }

    /// The catalog embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and check a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Load a catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuoteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(
            "Loaded {} sheet(s) from {}",
            catalog.sheets.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Check catalog consistency: non-empty, unique names, positive sizes.
    pub fn check(&self) -> Result<()> {
        if self.sheets.is_empty() {
            return Err(QuoteError::InvalidCatalog {
                message: "catalog has no sheets".into(),
            });
        }

        if !self.cut_loss.is_finite() {
            return Err(QuoteError::InvalidCatalog {
                message: format!("cut loss {} is not finite", self.cut_loss),
            });
        }

        let mut names = HashSet::new();
        for sheet in &self.sheets {
            if !names.insert(sheet.name.as_str()) {
                return Err(QuoteError::InvalidCatalog {
                    message: format!("duplicate sheet name '{}'", sheet.name),
                });
            }

            if !(sheet.width > 0.0 && sheet.height > 0.0) {
                return Err(QuoteError::InvalidCatalog {
                    message: format!(
                        "sheet '{}' has invalid size ({}x{})",
                        sheet.name, sheet.width, sheet.height
                    ),
                });
            }

            if sheet.width + self.cut_loss <= 0.0 || sheet.height + self.cut_loss <= 0.0 {
                return Err(QuoteError::InvalidCatalog {
                    message: format!(
                        "cut loss {} leaves no usable area on sheet '{}'",
                        self.cut_loss, sheet.name
                    ),
                });
            }
        }

        Ok(())
    }

    /// Find a sheet by name.
    pub fn find(&self, name: &str) -> Option<&StockSheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Usable sheets stocked in `thickness`, in catalog order.
    pub fn usable_sheets(&self, thickness: Thickness) -> impl Iterator<Item = Sheet> + '_ {
        self.sheets
            .iter()
            .filter_map(move |s| s.usable(thickness, self.cut_loss))
    }

    /// Check if any sheet is stocked in `thickness`.
    pub fn offers(&self, thickness: Thickness) -> bool {
        self.sheets.iter().any(|s| s.supports(thickness))
    }
}
