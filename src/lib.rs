//! acrylic-quote - Material quoting and cutting layouts for acrylic boxes.
//!
//! Given the outer size of a box and a sheet thickness, the library derives
//! the six panels, finds the stock sheet size that makes the order cheapest,
//! and lays the panels out on that sheet.
//!
//! # Example
//!
//! ```no_run
//! use acrylic_quote::{quote_box, BoxRequest, Catalog, Thickness};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let thickness: Thickness = "3T".parse().unwrap();
//! let request = BoxRequest::new(300.0, 200.0, 100.0, thickness).with_quantity(4);
//! let quote = quote_box(&request, &catalog).unwrap();
//! println!("{} x{}: {}", quote.sheet.name, quote.sheets_needed, quote.total_cost);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod model;
pub mod pricing;
pub mod store;
pub mod validation;

// Re-exports for convenience
pub use config::Thickness;
pub use error::{QuoteError, Result};
pub use generator::{render_layout_svg, render_order_text};
pub use layout::{calculate_dimensions, calculate_panel_yield, fit_parts_on_sheet, select_optimal_sheet};
pub use model::{
    BoxRequest, Catalog, OrderForm, OrderItem, PanelOption, PanelRequest, PartDimension,
    PartName, PlacedPart, QuoteResult, Sender, Sheet, SheetSelection, StockSheet,
    SurfaceTreatment,
};
pub use pricing::calculate_total_cost;
pub use store::{BoxForm, FormStore, JsonFileStore, MemoryStore, PanelForm};
pub use validation::{
    validate_box_request, validate_order_form, validate_panel_request, ValidationResult,
};

/// Quote a box order.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Validate the request
/// 2. Derive the six panels
/// 3. Select the cheapest sheet and its layout
/// 4. Apply the labor factor
pub fn quote_box(request: &BoxRequest, catalog: &Catalog) -> Result<QuoteResult> {
    for warning in validate_box_request(request).into_result()? {
        tracing::warn!("{}", warning);
    }

    let dimensions = calculate_dimensions(
        request.width,
        request.height,
        request.depth,
        request.thickness,
    );

    let selection = select_optimal_sheet(
        &dimensions,
        request.thickness,
        request.quantity,
        catalog,
    )?;

    validation::ensure_layout(&selection.layout, &selection.sheet)?;

    let total_cost = calculate_total_cost(selection.total_material_cost, request.labor_factor);
    let cost_per_box = pricing::cost_per_unit(total_cost, request.quantity);

    Ok(QuoteResult {
        dimensions,
        thickness: request.thickness,
        quantity: request.quantity,
        sheet: selection.sheet,
        layout: selection.layout,
        sheets_needed: selection.sheets_needed,
        total_material_cost: selection.total_material_cost,
        labor_factor: request.labor_factor,
        total_cost,
        cost_per_box,
    })
}

/// Rank catalog sheets for a flat panel order after validating it.
pub fn quote_panel(request: &PanelRequest, catalog: &Catalog) -> Result<Vec<PanelOption>> {
    validate_panel_request(request).into_result()?;
    calculate_panel_yield(request, catalog)
}

/// Check an order form against the catalog and render it as text.
pub fn write_order_form(form: &OrderForm, catalog: &Catalog) -> Result<String> {
    for warning in validate_order_form(form, catalog).into_result()? {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        "Order for {}: {} line(s), {} sheet(s)",
        form.recipient,
        form.items.len(),
        form.total_sheets()
    );

    Ok(render_order_text(form))
}
