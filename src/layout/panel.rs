//! Grid yield of flat panels per stock sheet.

use crate::error::{QuoteError, Result};
use crate::model::{Catalog, PanelOption, PanelRequest};
use tracing::debug;

/// Rank catalog sheets by price per item for a flat panel request.
///
/// Each sheet stocked in the requested thickness is cut into a plain
/// `floor(W / w) x floor(H / h)` grid using its nominal size. Sheets that
/// yield nothing are left out. Options are sorted by ascending price per
/// item; equal prices keep catalog order.
///
/// # Errors
///
/// * [`QuoteError::InvalidInput`] for non-positive item sizes.
/// * [`QuoteError::NoSuitableSheet`] if no sheet is stocked in the thickness.
/// * [`QuoteError::PartsDoNotFit`] if the item is larger than every sheet.
pub fn calculate_panel_yield(request: &PanelRequest, catalog: &Catalog) -> Result<Vec<PanelOption>> {
    if !(request.width > 0.0 && request.height > 0.0)
        || !request.width.is_finite()
        || !request.height.is_finite()
    {
        return Err(QuoteError::InvalidInput {
            message: format!(
                "panel size must be positive ({}x{})",
                request.width, request.height
            ),
        });
    }

    let mut priced = 0usize;
    let mut options = Vec::new();

    for sheet in &catalog.sheets {
        let Some(fee) = sheet.fee_for(request.thickness) else {
            continue;
        };
        priced += 1;

        let horizontal = (sheet.width / request.width).floor() as u32;
        let vertical = (sheet.height / request.height).floor() as u32;
        let count = horizontal.saturating_mul(vertical);

        if count == 0 {
            debug!("Sheet {}: item does not fit", sheet.name);
            continue;
        }

        let price_per_item = fee as f64 / f64::from(count);
        debug!(
            "Sheet {}: {}x{} = {} item(s), {:.0} per item",
            sheet.name, horizontal, vertical, count, price_per_item
        );

        options.push(PanelOption {
            sheet_name: sheet.name.clone(),
            sheet_width: sheet.width,
            sheet_height: sheet.height,
            horizontal,
            vertical,
            count,
            fee,
            price_per_item,
        });
    }

    if priced == 0 {
        return Err(QuoteError::NoSuitableSheet {
            thickness: request.thickness,
        });
    }
    if options.is_empty() {
        return Err(QuoteError::PartsDoNotFit {
            thickness: request.thickness,
        });
    }

    options.sort_by(|a, b| a.price_per_item.total_cmp(&b.price_per_item));
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Thickness;
    use crate::model::StockSheet;
    use pretty_assertions::assert_eq;

    fn t(tenths: u16) -> Thickness {
        Thickness::from_tenths(tenths)
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                StockSheet::new("A", 900.0, 1800.0)
                    .with_fee(t(30), Some(45_000))
                    .with_fee(t(50), None),
                StockSheet::new("B", 1220.0, 2440.0).with_fee(t(30), Some(80_000)),
            ],
            -10.0,
        )
    }

    #[test]
    fn test_panel_yield_grid_counts() {
        let request = PanelRequest::new(300.0, 200.0, t(30));
        let options = calculate_panel_yield(&request, &catalog()).unwrap();

        assert_eq!(options.len(), 2);
        // A: 3 x 9 = 27 -> 1666.67 per item; B: 4 x 12 = 48 -> 1666.67 per item
        let a = options.iter().find(|o| o.sheet_name == "A").unwrap();
        assert_eq!((a.horizontal, a.vertical, a.count), (3, 9, 27));
        let b = options.iter().find(|o| o.sheet_name == "B").unwrap();
        assert_eq!((b.horizontal, b.vertical, b.count), (4, 12, 48));
    }

    #[test]
    fn test_panel_yield_sorted_by_price_per_item() {
        let request = PanelRequest::new(400.0, 400.0, t(30));
        let options = calculate_panel_yield(&request, &catalog()).unwrap();

        // A: 2 x 4 = 8 -> 5625; B: 3 x 6 = 18 -> 4444.4
        assert_eq!(options[0].sheet_name, "B");
        assert_eq!(options[1].sheet_name, "A");
        assert!(options[0].price_per_item <= options[1].price_per_item);
    }

    #[test]
    fn test_panel_yield_drops_sheets_too_small() {
        let request = PanelRequest::new(1000.0, 1000.0, t(30));
        let options = calculate_panel_yield(&request, &catalog()).unwrap();

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].sheet_name, "B");
        assert_eq!(options[0].count, 2);
    }

    #[test]
    fn test_panel_yield_errors() {
        let err = calculate_panel_yield(&PanelRequest::new(100.0, 100.0, t(50)), &catalog())
            .unwrap_err();
        assert!(matches!(err, QuoteError::NoSuitableSheet { .. }));

        let err = calculate_panel_yield(&PanelRequest::new(5000.0, 100.0, t(30)), &catalog())
            .unwrap_err();
        assert!(matches!(err, QuoteError::PartsDoNotFit { .. }));

        let err = calculate_panel_yield(&PanelRequest::new(0.0, 100.0, t(30)), &catalog())
            .unwrap_err();
        assert!(matches!(err, QuoteError::InvalidInput { .. }));
    }
}
