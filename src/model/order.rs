//! Material order form sent to a sheet supplier.

use crate::config::Thickness;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Finish applied to the sheet surface.
///
/// Serialized as its Korean label; any other text is kept as a custom finish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SurfaceTreatment {
    /// 매끈하게
    Smooth,
    /// 단면 아스텔
    SingleAstel,
    /// 양면 아스텔
    DoubleAstel,
    /// 단면 사틴
    SingleSatin,
    /// 양면 사틴
    DoubleSatin,
    /// Free text entered by the customer.
    Custom(String),
}

impl SurfaceTreatment {
    /// The preset finishes in form order.
    pub const PRESETS: [SurfaceTreatment; 5] = [
        SurfaceTreatment::Smooth,
        SurfaceTreatment::SingleAstel,
        SurfaceTreatment::DoubleAstel,
        SurfaceTreatment::SingleSatin,
        SurfaceTreatment::DoubleSatin,
    ];

    /// Label printed on the order form.
    pub fn label(&self) -> &str {
        match self {
            SurfaceTreatment::Smooth => "매끈하게",
            SurfaceTreatment::SingleAstel => "단면 아스텔",
            SurfaceTreatment::DoubleAstel => "양면 아스텔",
            SurfaceTreatment::SingleSatin => "단면 사틴",
            SurfaceTreatment::DoubleSatin => "양면 사틴",
            SurfaceTreatment::Custom(text) => text.as_str(),
        }
    }

    /// Check if this is a free-text finish.
    pub fn is_custom(&self) -> bool {
        matches!(self, SurfaceTreatment::Custom(_))
    }
}

impl fmt::Display for SurfaceTreatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for SurfaceTreatment {
    type Err = std::convert::Infallible;

    /// Accepts the Korean labels or `smooth`, `single-astel`, `double-astel`,
    /// `single-satin`, `double-satin`. Anything else is a custom finish.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let preset = match trimmed.to_ascii_lowercase().as_str() {
            "smooth" => Some(SurfaceTreatment::Smooth),
            "single-astel" => Some(SurfaceTreatment::SingleAstel),
            "double-astel" => Some(SurfaceTreatment::DoubleAstel),
            "single-satin" => Some(SurfaceTreatment::SingleSatin),
            "double-satin" => Some(SurfaceTreatment::DoubleSatin),
            _ => Self::PRESETS.into_iter().find(|p| p.label() == trimmed),
        };
        Ok(preset.unwrap_or_else(|| SurfaceTreatment::Custom(trimmed.to_string())))
    }
}

impl From<String> for SurfaceTreatment {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(treatment) => treatment,
            Err(never) => match never {},
        }
    }
}

impl From<SurfaceTreatment> for String {
    fn from(value: SurfaceTreatment) -> Self {
        match value {
            SurfaceTreatment::Custom(text) => text,
            preset => preset.label().to_string(),
        }
    }
}

/// Business sending the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Business name, signed at the foot of the form.
    pub name: String,
    /// Address and contact lines printed under the recipient.
    #[serde(default)]
    pub info: Vec<String>,
}

impl Sender {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            info: Vec::new(),
        }
    }

    /// Add a contact line.
    pub fn with_info(mut self, line: impl Into<String>) -> Self {
        self.info.push(line.into());
        self
    }
}

/// One ordered line of stock sheets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// What the sheets are for.
    pub product_name: String,
    /// Sheet thickness.
    pub thickness: Thickness,
    /// Stock sheet name from the catalog.
    pub specification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_treatment: Option<SurfaceTreatment>,
    /// Number of sheets.
    pub quantity: u32,
}

impl OrderItem {
    /// Create a line for one sheet with no surface treatment.
    pub fn new(
        product_name: impl Into<String>,
        thickness: Thickness,
        specification: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            thickness,
            specification: specification.into(),
            surface_treatment: None,
            quantity: 1,
        }
    }

    /// Set the number of sheets.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set the surface treatment.
    pub fn with_surface_treatment(mut self, treatment: SurfaceTreatment) -> Self {
        self.surface_treatment = Some(treatment);
        self
    }
}

/// A material order document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderForm {
    /// Supplier receiving the order.
    pub recipient: String,
    pub sender: Sender,
    /// Date printed on the form. Front ends fill in today when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<NaiveDate>,
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_notes: Option<String>,
}

impl OrderForm {
    /// Create an empty order.
    pub fn new(recipient: impl Into<String>, sender: Sender) -> Self {
        Self {
            recipient: recipient.into(),
            sender,
            order_date: None,
            items: Vec::new(),
            special_notes: None,
        }
    }

    /// Add an item line.
    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    /// Set the order date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.order_date = Some(date);
        self
    }

    /// Set the special notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.special_notes = Some(notes.into());
        self
    }

    /// Total sheets across all lines.
    pub fn total_sheets(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_surface_treatment_parse() {
        assert_eq!(
            "양면 아스텔".parse::<SurfaceTreatment>().unwrap(),
            SurfaceTreatment::DoubleAstel
        );
        assert_eq!(
            "Single-Satin".parse::<SurfaceTreatment>().unwrap(),
            SurfaceTreatment::SingleSatin
        );
        assert_eq!(
            " 유광 코팅 ".parse::<SurfaceTreatment>().unwrap(),
            SurfaceTreatment::Custom("유광 코팅".to_string())
        );
    }

    #[test]
    fn test_surface_treatment_serializes_as_label() {
        let json = serde_json::to_string(&SurfaceTreatment::Smooth).unwrap();
        assert_eq!(json, r#""매끈하게""#);

        let custom: SurfaceTreatment = serde_json::from_str(r#""샌딩""#).unwrap();
        assert!(custom.is_custom());
        assert_eq!(custom.to_string(), "샌딩");
    }

    #[test]
    fn test_order_form_json() {
        let json = r#"{
            "recipient": "청구산업",
            "sender": { "name": "미광산업", "info": ["TEL: 02-000-0000"] },
            "order_date": "2026-10-18",
            "items": [
                { "product_name": "케이스", "thickness": "3", "specification": "대36판",
                  "surface_treatment": "단면 사틴", "quantity": 4 },
                { "product_name": "받침", "thickness": "1.3T", "specification": "4x8판",
                  "quantity": 2 }
            ]
        }"#;
        let form: OrderForm = serde_json::from_str(json).unwrap();

        assert_eq!(form.items.len(), 2);
        assert_eq!(form.items[0].thickness, Thickness::from_tenths(30));
        assert_eq!(
            form.items[0].surface_treatment,
            Some(SurfaceTreatment::SingleSatin)
        );
        assert_eq!(form.items[1].surface_treatment, None);
        assert_eq!(form.order_date, NaiveDate::from_ymd_opt(2026, 10, 18));
        assert_eq!(form.special_notes, None);
        assert_eq!(form.total_sheets(), 6);
    }
}
