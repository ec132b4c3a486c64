//! PlacedPart - A part positioned on a sheet.

use super::PartName;
use serde::{Deserialize, Serialize};

/// One entry of a cutting layout. Origin is the top-left corner of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedPart {
    /// Face of the box this piece forms.
    pub part: PartName,
    /// Left edge X coordinate.
    pub x: f64,
    /// Top edge Y coordinate.
    pub y: f64,
    /// Piece width.
    pub width: f64,
    /// Piece height.
    pub height: f64,
}

impl PlacedPart {
    /// Get the right edge X coordinate.
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge Y coordinate.
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    /// Surface area in mm².
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Get the center X coordinate.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Get the center Y coordinate.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Check if this piece overlaps another (shared edges do not count).
    pub fn overlaps(&self, other: &PlacedPart) -> bool {
        let x_overlap = self.x < other.x_max() && other.x < self.x_max();
        let y_overlap = self.y < other.y_max() && other.y < self.y_max();
        x_overlap && y_overlap
    }
}
