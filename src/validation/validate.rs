//! Validation logic run before quoting.

use crate::config::float_cmp::fits_within;
use crate::config::MAX_ORDER_ITEMS;
use crate::error::{QuoteError, Result};
use crate::layout::calculate_dimensions;
use crate::model::{
    BoxRequest, Catalog, OrderForm, OrderItem, PanelRequest, PlacedPart, Sheet, SurfaceTreatment,
};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }

    /// Turn a failed result into an error carrying every message.
    pub fn into_result(self) -> Result<Vec<String>> {
        if !self.passed {
            return Err(QuoteError::InvalidInput {
                message: self.errors.join("; "),
            });
        }
        Ok(self.warnings)
    }
}

fn check_length(result: &mut ValidationResult, name: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        result.add_error(format!("{} must be a positive number of mm (got {})", name, value));
    }
}

/// Validate a box request.
pub fn validate_box_request(request: &BoxRequest) -> ValidationResult {
    let mut result = ValidationResult::ok();

    check_length(&mut result, "Width", request.width);
    check_length(&mut result, "Height", request.height);
    check_length(&mut result, "Depth", request.depth);

    if !request.thickness.is_standard() {
        result.add_error(format!(
            "Thickness {} is not a standard sheet thickness",
            request.thickness
        ));
    }

    if request.quantity == 0 {
        result.add_error("Quantity must be at least 1");
    }

    if !request.labor_factor.is_finite() || request.labor_factor <= 0.0 {
        result.add_error(format!(
            "Labor factor must be positive (got {})",
            request.labor_factor
        ));
    } else if request.labor_factor < 1.0 {
        result.add_warning(format!(
            "Labor factor {} prices below material cost",
            request.labor_factor
        ));
    }

    // Walls sit between top and bottom, so the material must leave room
    if result.passed {
        let parts = calculate_dimensions(
            request.width,
            request.height,
            request.depth,
            request.thickness,
        );
        for part in parts.iter().filter(|p| !p.is_positive()) {
            result.add_error(format!(
                "Thickness {} leaves no material for the {} panel ({}x{})",
                request.thickness, part.part, part.width, part.height
            ));
        }
    }

    result
}

/// Validate a flat panel request.
pub fn validate_panel_request(request: &PanelRequest) -> ValidationResult {
    let mut result = ValidationResult::ok();

    check_length(&mut result, "Width", request.width);
    check_length(&mut result, "Height", request.height);

    if !request.thickness.is_standard() {
        result.add_error(format!(
            "Thickness {} is not a standard sheet thickness",
            request.thickness
        ));
    }

    result
}

/// Validate one line of an order form. `line` is 1-based.
pub fn validate_order_item(line: usize, item: &OrderItem, catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if item.product_name.trim().is_empty() {
        result.add_warning(format!("Line {} has no product name", line));
    }

    if !item.thickness.is_standard() {
        result.add_error(format!(
            "Line {}: thickness {} is not a standard sheet thickness",
            line, item.thickness
        ));
    }

    match catalog.find(&item.specification) {
        None => result.add_error(format!(
            "Line {}: unknown sheet specification '{}'",
            line, item.specification
        )),
        Some(sheet) if !sheet.supports(item.thickness) => result.add_warning(format!(
            "Line {}: {} has no listed price in {}",
            line, sheet.name, item.thickness
        )),
        Some(_) => {}
    }

    if let Some(SurfaceTreatment::Custom(text)) = &item.surface_treatment {
        if text.trim().is_empty() {
            result.add_error(format!("Line {}: custom surface treatment is empty", line));
        }
    }

    if item.quantity == 0 {
        result.add_error(format!("Line {}: quantity must be at least 1", line));
    }

    result
}

/// Validate a material order form against the sheet catalog.
pub fn validate_order_form(form: &OrderForm, catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if form.recipient.trim().is_empty() {
        result.add_error("Recipient is required");
    }
    if form.sender.name.trim().is_empty() {
        result.add_error("Sender name is required");
    }

    if form.items.is_empty() {
        result.add_error("Order has no items");
    } else if form.items.len() > MAX_ORDER_ITEMS {
        result.add_error(format!(
            "Order has {} items, a form holds at most {}",
            form.items.len(),
            MAX_ORDER_ITEMS
        ));
    }

    for (idx, item) in form.items.iter().enumerate() {
        result.merge(validate_order_item(idx + 1, item, catalog));
    }

    result
}

/// Validate that a layout stays on the sheet with no overlapping parts.
pub fn validate_layout(layout: &[PlacedPart], sheet: &Sheet) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (idx, placed) in layout.iter().enumerate() {
        if placed.x < 0.0
            || placed.y < 0.0
            || !fits_within(placed.x_max(), sheet.width)
            || !fits_within(placed.y_max(), sheet.height)
        {
            result.add_error(format!(
                "Part {} ({}) extends beyond sheet {} ({}x{})",
                idx + 1,
                placed.part,
                sheet.name,
                sheet.width,
                sheet.height
            ));
        }
    }

    for (i, j) in find_overlaps(layout) {
        result.add_error(format!(
            "Part {} ({}) overlaps part {} ({})",
            i + 1,
            layout[i].part,
            j + 1,
            layout[j].part
        ));
    }

    result
}

/// Fail unless the layout stays on the sheet with no overlapping parts.
pub fn ensure_layout(layout: &[PlacedPart], sheet: &Sheet) -> Result<()> {
    let check = validate_layout(layout, sheet);
    if check.passed {
        return Ok(());
    }
    Err(QuoteError::InvalidLayout {
        sheet: sheet.name.clone(),
        message: check.errors.join("; "),
    })
}

/// Index pairs of overlapping parts.
pub fn find_overlaps(layout: &[PlacedPart]) -> Vec<(usize, usize)> {
    let mut overlaps = Vec::new();

    for i in 0..layout.len() {
        for j in i + 1..layout.len() {
            if layout[i].overlaps(&layout[j]) {
                overlaps.push((i, j));
            }
        }
    }

    overlaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Thickness;
    use crate::model::{PartName, Sender, StockSheet};

    fn t(tenths: u16) -> Thickness {
        Thickness::from_tenths(tenths)
    }

    fn basic_request() -> BoxRequest {
        BoxRequest::new(300.0, 200.0, 100.0, t(30))
    }

    fn placed(x: f64, y: f64, width: f64, height: f64) -> PlacedPart {
        PlacedPart {
            part: PartName::Top,
            x,
            y,
            width,
            height,
        }
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    #[test]
    fn test_validation_result_into_result() {
        let mut result = ValidationResult::ok();
        result.add_warning("careful");
        assert_eq!(result.into_result().unwrap(), vec!["careful".to_string()]);

        let mut result = ValidationResult::ok();
        result.add_error("a");
        result.add_error("b");
        let err = result.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: a; b");
    }

    // ==================== validate_box_request tests ====================

    #[test]
    fn test_validate_box_request_valid() {
        let result = validate_box_request(&basic_request());
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_box_request_non_positive_dimensions() {
        let mut request = basic_request();
        request.width = 0.0;
        request.depth = -5.0;
        let result = validate_box_request(&request);

        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.starts_with("Width")));
        assert!(result.errors.iter().any(|e| e.starts_with("Depth")));
    }

    #[test]
    fn test_validate_box_request_nan() {
        let mut request = basic_request();
        request.height = f64::NAN;
        assert!(!validate_box_request(&request).passed);
    }

    #[test]
    fn test_validate_box_request_zero_quantity() {
        let result = validate_box_request(&basic_request().with_quantity(0));
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("Quantity")));
    }

    #[test]
    fn test_validate_box_request_non_standard_thickness() {
        let mut request = basic_request();
        request.thickness = t(35);
        let result = validate_box_request(&request);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("3.5T")));
    }

    #[test]
    fn test_validate_box_request_labor_factor() {
        let result = validate_box_request(&basic_request().with_labor_factor(0.0));
        assert!(!result.passed);

        let result = validate_box_request(&basic_request().with_labor_factor(0.8));
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validate_box_request_thickness_too_large() {
        let request = BoxRequest::new(100.0, 20.0, 100.0, t(100));
        let result = validate_box_request(&request);

        assert!(!result.passed);
        // left, right, front, back all lose their height
        assert_eq!(result.errors.len(), 4);
        assert!(result.errors[0].contains("left"));
    }

    // ==================== validate_panel_request tests ====================

    #[test]
    fn test_validate_panel_request() {
        assert!(validate_panel_request(&PanelRequest::new(100.0, 50.0, t(20))).passed);
        assert!(!validate_panel_request(&PanelRequest::new(-1.0, 50.0, t(20))).passed);
        assert!(!validate_panel_request(&PanelRequest::new(100.0, 50.0, t(21))).passed);
    }

    // ==================== validate_order_form tests ====================

    fn order_catalog() -> Catalog {
        Catalog::new(
            vec![
                StockSheet::new("대36판", 1000.0, 2000.0).with_fee(t(30), Some(57_000)),
                StockSheet::new("4x8판", 1220.0, 2440.0)
                    .with_fee(t(30), Some(83_400))
                    .with_fee(t(13), None),
            ],
            0.0,
        )
    }

    fn order() -> OrderForm {
        OrderForm::new("청구산업", Sender::new("미광산업"))
            .with_item(OrderItem::new("케이스", t(30), "대36판").with_quantity(4))
    }

    #[test]
    fn test_validate_order_form_valid() {
        let result = validate_order_form(&order(), &order_catalog());
        assert!(result.passed, "{:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_order_form_header() {
        let mut form = order();
        form.recipient = "  ".to_string();
        form.sender.name.clear();
        let result = validate_order_form(&form, &order_catalog());

        assert!(!result.passed);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_validate_order_form_item_count() {
        let empty = OrderForm::new("청구산업", Sender::new("미광산업"));
        let result = validate_order_form(&empty, &order_catalog());
        assert_eq!(result.errors, vec!["Order has no items".to_string()]);

        let mut full = order();
        for _ in 0..MAX_ORDER_ITEMS {
            full.items.push(full.items[0].clone());
        }
        let result = validate_order_form(&full, &order_catalog());
        assert!(!result.passed);
        assert!(result.errors[0].contains("at most 10"));
    }

    #[test]
    fn test_validate_order_items_merged_per_line() {
        let form = order()
            .with_item(OrderItem::new("받침", t(35), "대36판"))
            .with_item(OrderItem::new("뚜껑", t(30), "6x12판").with_quantity(0))
            .with_item(
                OrderItem::new("", t(13), "4x8판")
                    .with_surface_treatment(SurfaceTreatment::Custom(" ".to_string())),
            );
        let result = validate_order_form(&form, &order_catalog());

        assert!(!result.passed);
        assert_eq!(
            result.errors,
            vec![
                "Line 2: thickness 3.5T is not a standard sheet thickness".to_string(),
                "Line 3: unknown sheet specification '6x12판'".to_string(),
                "Line 3: quantity must be at least 1".to_string(),
                "Line 4: custom surface treatment is empty".to_string(),
            ]
        );
        assert_eq!(
            result.warnings,
            vec![
                "Line 2: 대36판 has no listed price in 3.5T".to_string(),
                "Line 4 has no product name".to_string(),
                "Line 4: 4x8판 has no listed price in 1.3T".to_string(),
            ]
        );
    }

    // ==================== validate_layout tests ====================

    #[test]
    fn test_validate_layout_ok() {
        let sheet = Sheet::new("A", 200.0, 100.0, 1);
        let layout = vec![placed(0.0, 0.0, 100.0, 100.0), placed(100.0, 0.0, 100.0, 100.0)];
        assert!(validate_layout(&layout, &sheet).passed);
    }

    #[test]
    fn test_validate_layout_out_of_bounds() {
        let sheet = Sheet::new("A", 200.0, 100.0, 1);
        let layout = vec![placed(150.0, 0.0, 100.0, 100.0)];
        let result = validate_layout(&layout, &sheet);
        assert!(!result.passed);
        assert!(result.errors[0].contains("extends beyond"));
    }

    #[test]
    fn test_ensure_layout() {
        let sheet = Sheet::new("A", 200.0, 100.0, 1);
        assert!(ensure_layout(&[placed(0.0, 0.0, 100.0, 100.0)], &sheet).is_ok());

        let layout = vec![placed(0.0, 0.0, 100.0, 100.0), placed(50.0, 0.0, 100.0, 100.0)];
        let err = ensure_layout(&layout, &sheet).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidLayout { sheet: ref name, .. } if name == "A"));
        assert_eq!(err.code_value(), 202);
        assert!(err.to_string().contains("overlaps"));
    }

    #[test]
    fn test_find_overlaps() {
        let layout = vec![
            placed(0.0, 0.0, 100.0, 100.0),
            placed(50.0, 50.0, 100.0, 100.0),
            placed(100.0, 60.0, 10.0, 10.0),
        ];
        assert_eq!(find_overlaps(&layout), vec![(0, 1), (1, 2)]);
    }
}
