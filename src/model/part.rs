//! Part - One flat panel of a box.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which face of the box a panel forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartName {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl PartName {
    /// All six faces in derivation order.
    pub const ALL: [PartName; 6] = [
        PartName::Top,
        PartName::Bottom,
        PartName::Left,
        PartName::Right,
        PartName::Front,
        PartName::Back,
    ];

    /// Identifier used in JSON and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartName::Top => "top",
            PartName::Bottom => "bottom",
            PartName::Left => "left",
            PartName::Right => "right",
            PartName::Front => "front",
            PartName::Back => "back",
        }
    }

    /// Korean shop-floor label shown on layout drawings.
    pub fn label(&self) -> &'static str {
        match self {
            PartName::Top => "상단",
            PartName::Bottom => "하단",
            PartName::Left => "왼쪽",
            PartName::Right => "오른쪽",
            PartName::Front => "앞면",
            PartName::Back => "뒷면",
        }
    }
}

impl fmt::Display for PartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A named rectangular piece cut from stock (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartDimension {
    /// Face of the box.
    pub part: PartName,
    /// Horizontal size on the sheet.
    pub width: f64,
    /// Vertical size on the sheet.
    pub height: f64,
}

impl PartDimension {
    /// Create a new part dimension.
    pub fn new(part: PartName, width: f64, height: f64) -> Self {
        Self {
            part,
            width,
            height,
        }
    }

    /// Surface area in mm².
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check if both sides are strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
