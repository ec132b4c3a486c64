//! Configuration constants and settings for quoting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Default kerf/margin allowance added to a sheet's nominal size before packing.
pub const DEFAULT_CUT_LOSS: f64 = -10.0;

/// Number of flat panels that make up one box.
pub const PARTS_PER_BOX: usize = 6;

/// Default labor cost multiplier.
pub const DEFAULT_LABOR_FACTOR: f64 = 1.0;

/// Item lines printed on one order form.
pub const MAX_ORDER_ITEMS: usize = 10;

/// Thicknesses offered by acrylic suppliers, in tenths of a millimetre.
pub const STANDARD_THICKNESSES: [u16; 20] = [
    10, 13, 15, 18, 20, 25, 30, 40, 50, 60, 70, 80, 90, 100, 120, 150, 180, 200, 250, 300,
];

/// Sheet thickness, stored in tenths of a millimetre.
///
/// Displayed the way suppliers label stock (`3T`, `1.3T`). Serialized as a
/// string so it can key a JSON fee table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Thickness(u16);

impl Thickness {
    /// Create a thickness from tenths of a millimetre.
    pub const fn from_tenths(tenths: u16) -> Self {
        Self(tenths)
    }

    /// Create a thickness from millimetres.
    ///
    /// Returns `None` for non-finite, non-positive or out-of-range values,
    /// and for values that are not a whole number of tenths (`1.25`, `2.96`).
    pub fn from_mm(mm: f64) -> Option<Self> {
        if !mm.is_finite() || mm <= 0.0 {
            return None;
        }
        let tenths = (mm * 10.0).round();
        if tenths < 1.0 || tenths > f64::from(u16::MAX) {
            return None;
        }
        if !float_cmp::approx_eq(mm, tenths / 10.0) {
            return None;
        }
        Some(Self(tenths as u16))
    }

    /// Thickness in tenths of a millimetre.
    pub fn tenths(&self) -> u16 {
        self.0
    }

    /// Thickness in millimetres.
    pub fn mm(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Check if this is one of the standard supplier thicknesses.
    pub fn is_standard(&self) -> bool {
        STANDARD_THICKNESSES.contains(&self.0)
    }

    /// All standard supplier thicknesses, thinnest first.
    pub fn standard() -> impl Iterator<Item = Thickness> {
        STANDARD_THICKNESSES.iter().copied().map(Thickness)
    }

    /// Numeric form without the `T` suffix (`3`, `1.3`).
    fn numeric(&self) -> String {
        if self.0 % 10 == 0 {
            format!("{}", self.0 / 10)
        } else {
            format!("{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T", self.numeric())
    }
}

impl FromStr for Thickness {
    type Err = String;

    /// Parse `3`, `3T`, `1.3` or `1.3t`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_suffix('T')
            .or_else(|| trimmed.strip_suffix('t'))
            .unwrap_or(trimmed);

        let mm: f64 = number
            .trim()
            .parse()
            .map_err(|_| format!("invalid thickness '{}'", s))?;

        Thickness::from_mm(mm).ok_or_else(|| format!("invalid thickness '{}'", s))
    }
}

impl TryFrom<String> for Thickness {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Thickness> for String {
    fn from(value: Thickness) -> Self {
        value.numeric()
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if `a` does not exceed `limit`, with epsilon tolerance.
    #[inline]
    pub fn fits_within(a: f64, limit: f64) -> bool {
        a <= limit + EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thickness_parse() {
        assert_eq!("3".parse::<Thickness>().unwrap().tenths(), 30);
        assert_eq!("3T".parse::<Thickness>().unwrap().tenths(), 30);
        assert_eq!("1.3t".parse::<Thickness>().unwrap().tenths(), 13);
        assert_eq!(" 2.5 ".parse::<Thickness>().unwrap().tenths(), 25);
    }

    #[test]
    fn test_thickness_parse_invalid() {
        assert!("".parse::<Thickness>().is_err());
        assert!("abc".parse::<Thickness>().is_err());
        assert!("0".parse::<Thickness>().is_err());
        assert!("-3".parse::<Thickness>().is_err());
    }

    #[test]
    fn test_thickness_display() {
        assert_eq!(Thickness::from_tenths(30).to_string(), "3T");
        assert_eq!(Thickness::from_tenths(13).to_string(), "1.3T");
        assert_eq!(String::from(Thickness::from_tenths(13)), "1.3");
    }

    #[test]
    fn test_thickness_from_mm() {
        assert_eq!(Thickness::from_mm(1.3), Some(Thickness::from_tenths(13)));
        assert_eq!(Thickness::from_mm(0.1 * 3.0), Some(Thickness::from_tenths(3)));
        assert_eq!(Thickness::from_mm(2.04), None);
        assert_eq!(Thickness::from_mm(f64::NAN), None);
        assert_eq!(Thickness::from_mm(0.0), None);
    }

    #[test]
    fn test_thickness_parse_rejects_finer_than_tenths() {
        // Would otherwise round onto the standard 1.3T and 3T stock
        assert!("1.25".parse::<Thickness>().is_err());
        assert!("2.96T".parse::<Thickness>().is_err());
        assert!("3.00".parse::<Thickness>().is_ok());
    }

    #[test]
    fn test_thickness_standard_set() {
        assert!(Thickness::from_tenths(30).is_standard());
        assert!(!Thickness::from_tenths(35).is_standard());
        assert_eq!(Thickness::standard().count(), STANDARD_THICKNESSES.len());
        assert!((Thickness::from_tenths(25).mm() - 2.5).abs() < EPS);
    }

    #[test]
    fn test_thickness_json_round_trip_as_map_key() {
        let mut fees = std::collections::BTreeMap::new();
        fees.insert(Thickness::from_tenths(13), Some(100u64));
        fees.insert(Thickness::from_tenths(30), None);

        let json = serde_json::to_string(&fees).unwrap();
        assert_eq!(json, r#"{"1.3":100,"3":null}"#);

        let parsed: std::collections::BTreeMap<Thickness, Option<u64>> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fees);
    }

    #[test]
    fn test_float_cmp() {
        assert!(float_cmp::approx_eq(1.0, 1.00001));
        assert!(!float_cmp::approx_eq(1.0, 1.1));
        assert!(float_cmp::fits_within(900.00001, 900.0));
        assert!(!float_cmp::fits_within(900.1, 900.0));
    }
}
