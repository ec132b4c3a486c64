//! Plain-text rendering of a material order form.
//!
//! The form always prints [`MAX_ORDER_ITEMS`] item rows so hand-written
//! additions have room; unused rows are left blank.

use crate::config::MAX_ORDER_ITEMS;
use crate::model::{OrderForm, OrderItem};
use std::fmt::Write;

const TITLE: &str = "재료 주문서";
const HEADER: [&str; 5] = ["제품명", "두께", "규격", "표면처리", "수량"];

fn row(cells: &[&str]) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(cell);
        line.push_str(" |");
    }
    line
}

fn item_row(item: &OrderItem) -> String {
    let thickness = item.thickness.to_string();
    let surface = item
        .surface_treatment
        .as_ref()
        .map(|s| s.label())
        .unwrap_or("");
    let quantity = item.quantity.to_string();

    row(&[
        item.product_name.trim(),
        thickness.as_str(),
        item.specification.as_str(),
        surface,
        quantity.as_str(),
    ])
}

/// Render the order form as text.
pub fn render_order_text(form: &OrderForm) -> String {
    let mut out = String::new();

    writeln!(out, "{}", TITLE).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "받는 사람: {}", form.recipient).unwrap();
    for line in &form.sender.info {
        writeln!(out, "    {}", line).unwrap();
    }
    writeln!(out).unwrap();

    writeln!(out, "{}", row(&HEADER)).unwrap();
    writeln!(out, "{}", row(&["---"; 5])).unwrap();
    for item in &form.items {
        writeln!(out, "{}", item_row(item)).unwrap();
    }
    for _ in form.items.len()..MAX_ORDER_ITEMS {
        writeln!(out, "{}", row(&[""; 5])).unwrap();
    }

    writeln!(out).unwrap();
    writeln!(
        out,
        "특이사항: {}",
        form.special_notes.as_deref().unwrap_or("")
    )
    .unwrap();
    if let Some(date) = form.order_date {
        writeln!(out, "{}", date.format("%Y-%m-%d")).unwrap();
    }
    writeln!(out).unwrap();
    writeln!(out, "보내는 사람: {}", form.sender.name).unwrap();

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Thickness;
    use crate::model::{Sender, SurfaceTreatment};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample_form() -> OrderForm {
        OrderForm::new(
            "청구산업",
            Sender::new("미광산업").with_info("TEL: 02-000-0000"),
        )
        .with_date(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
        .with_item(
            OrderItem::new("케이스", Thickness::from_tenths(30), "대36판")
                .with_surface_treatment(SurfaceTreatment::DoubleAstel)
                .with_quantity(4),
        )
        .with_item(OrderItem::new("받침", Thickness::from_tenths(13), "3x6판").with_quantity(2))
        .with_notes("오전 배송")
    }

    #[test]
    fn test_render_order_text() {
        let text = render_order_text(&sample_form());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "재료 주문서");
        assert_eq!(lines[2], "받는 사람: 청구산업");
        assert_eq!(lines[3], "    TEL: 02-000-0000");
        assert_eq!(lines[5], "| 제품명 | 두께 | 규격 | 표면처리 | 수량 |");
        assert_eq!(lines[7], "| 케이스 | 3T | 대36판 | 양면 아스텔 | 4 |");
        assert_eq!(lines[8], "| 받침 | 1.3T | 3x6판 |  | 2 |");
        assert!(text.contains("특이사항: 오전 배송"));
        assert!(text.contains("2026-10-18"));
        assert_eq!(*lines.last().unwrap(), "보내는 사람: 미광산업");
    }

    #[test]
    fn test_render_order_text_pads_blank_rows() {
        let text = render_order_text(&sample_form());
        let item_rows = text.lines().filter(|l| l.starts_with('|')).count();
        // header, divider and a fixed block of item rows
        assert_eq!(item_rows, 2 + MAX_ORDER_ITEMS);
        assert_eq!(text.matches("|  |  |  |  |  |").count(), MAX_ORDER_ITEMS - 2);
    }

    #[test]
    fn test_render_order_text_without_date() {
        let mut form = sample_form();
        form.order_date = None;
        form.special_notes = None;
        let text = render_order_text(&form);

        assert!(!text.contains("2026"));
        assert!(text.contains("특이사항: \n"));
    }
}
