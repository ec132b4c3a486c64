//! Quote requests as entered on the order form.

use crate::config::{Thickness, DEFAULT_LABOR_FACTOR};
use serde::{Deserialize, Serialize};

/// A request to quote `quantity` identical boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxRequest {
    /// Outer width in mm.
    pub width: f64,
    /// Outer height in mm.
    pub height: f64,
    /// Outer depth in mm.
    pub depth: f64,
    /// Material thickness.
    pub thickness: Thickness,
    /// Number of boxes.
    pub quantity: u32,
    /// Multiplier applied to material cost.
    pub labor_factor: f64,
}

impl BoxRequest {
    /// Create a request for one box with the default labor factor.
    pub fn new(width: f64, height: f64, depth: f64, thickness: Thickness) -> Self {
        Self {
            width,
            height,
            depth,
            thickness,
            quantity: 1,
            labor_factor: DEFAULT_LABOR_FACTOR,
        }
    }

    /// Set the number of boxes.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set the labor multiplier.
    pub fn with_labor_factor(mut self, labor_factor: f64) -> Self {
        self.labor_factor = labor_factor;
        self
    }
}

/// A request to cut as many `width x height` flat panels as possible from
/// one stock sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelRequest {
    /// Item width in mm.
    pub width: f64,
    /// Item height in mm.
    pub height: f64,
    /// Material thickness.
    pub thickness: Thickness,
}

impl PanelRequest {
    pub fn new(width: f64, height: f64, thickness: Thickness) -> Self {
        Self {
            width,
            height,
            thickness,
        }
    }
}
