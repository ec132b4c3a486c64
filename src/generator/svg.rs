//! SVG drawing of a cutting layout.
//!
//! Sheets are stacked top to bottom, separated by red lines. Every sheet
//! repeats the single-sheet layout; the last one only shows the parts still
//! needed to complete the order. Orders above [`MAX_DRAWN_SHEETS`] are cut
//! short with a note giving the number of sheets left out.

use crate::model::{PlacedPart, QuoteResult, Sheet};
use std::fmt::Write;

/// Fill colours cycled by placement index.
pub const PART_COLORS: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F7DC6F", "#BB8FCE", "#82E0AA",
    "#F1948A", "#85C1E9",
];

/// Viewport for one sheet, in SVG user units.
const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 400.0;

/// Sheets drawn before the rest are summarised in a note.
pub const MAX_DRAWN_SHEETS: u64 = 20;

/// Height reserved for the omitted-sheets note.
const NOTE_HEIGHT: f64 = 30.0;

const BACKGROUND: &str = "#f0f0f0";
const SEPARATOR: &str = "#ff0000";
const FONT_SIZE: f64 = 14.0;

/// Minimal SVG writer.
pub struct SvgWriter {
    output: String,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Get the generated SVG content.
    pub fn into_string(self) -> String {
        self.output
    }

    /// Open the document.
    pub fn begin(&mut self, width: f64, height: f64) {
        writeln!(
            self.output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(width),
            h = num(height)
        )
        .unwrap();
    }

    /// Close the document.
    pub fn end(&mut self) {
        writeln!(self.output, "</svg>").unwrap();
    }

    /// Filled rectangle with an optional outline.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str, stroke: Option<&str>) {
        write!(
            self.output,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            num(x),
            num(y),
            num(width),
            num(height),
            fill
        )
        .unwrap();
        if let Some(stroke) = stroke {
            write!(self.output, r#" stroke="{}" stroke-width="1""#, stroke).unwrap();
        }
        writeln!(self.output, "/>").unwrap();
    }

    /// Straight line.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
        writeln!(
            self.output,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="2"/>"#,
            num(x1),
            num(y1),
            num(x2),
            num(y2),
            stroke
        )
        .unwrap();
    }

    /// Centered text.
    pub fn text(&mut self, x: f64, y: f64, content: &str) {
        writeln!(
            self.output,
            r#"  <text x="{}" y="{}" font-family="Arial" font-size="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            num(x),
            num(y),
            num(FONT_SIZE),
            escape_xml(content)
        )
        .unwrap();
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Draw one sheet's parts at a vertical offset.
fn draw_parts(svg: &mut SvgWriter, parts: &[PlacedPart], scale: f64, offset_y: f64) {
    for (idx, placed) in parts.iter().enumerate() {
        let color = PART_COLORS[idx % PART_COLORS.len()];
        svg.rect(
            placed.x * scale,
            offset_y + placed.y * scale,
            placed.width * scale,
            placed.height * scale,
            color,
            Some("#000"),
        );

        let cx = placed.center_x() * scale;
        let cy = offset_y + placed.center_y() * scale;
        svg.text(cx, cy - 10.0, placed.part.label());
        svg.text(
            cx,
            cy + 10.0,
            &format!("{}x{}", num(placed.width), num(placed.height)),
        );
    }
}

/// Render a single-sheet layout repeated over `sheets_needed` sheets.
///
/// `total_parts` is the number of parts in the whole order; the last sheet
/// shows only what remains after the full sheets before it.
pub fn render_sheet_layout_svg(
    sheet: &Sheet,
    layout: &[PlacedPart],
    sheets_needed: u64,
    total_parts: usize,
) -> String {
    let mut svg = SvgWriter::new();

    let scale = if sheet.width > 0.0 && sheet.height > 0.0 {
        (VIEW_WIDTH / sheet.width).min(VIEW_HEIGHT / sheet.height)
    } else {
        1.0
    };
    let sheet_count = sheets_needed.clamp(1, MAX_DRAWN_SHEETS);
    let omitted = sheets_needed.saturating_sub(sheet_count);
    let sheet_height = sheet.height * scale;
    let canvas_width = sheet.width * scale;
    let sheets_bottom = sheet_height * sheet_count as f64;
    let canvas_height = if omitted > 0 {
        tracing::warn!(
            "Drawing {} of {} sheets, {} left out",
            sheet_count,
            sheets_needed,
            omitted
        );
        sheets_bottom + NOTE_HEIGHT
    } else {
        sheets_bottom
    };

    svg.begin(canvas_width, canvas_height);
    svg.rect(0.0, 0.0, canvas_width, sheets_bottom, BACKGROUND, Some("#000"));

    let mut remaining = total_parts;
    for sheet_idx in 0..sheet_count {
        let take = remaining.min(layout.len());
        draw_parts(
            &mut svg,
            &layout[..take],
            scale,
            sheet_idx as f64 * sheet_height,
        );
        remaining -= take;
    }

    for sheet_idx in 1..sheet_count {
        let y = sheet_idx as f64 * sheet_height;
        svg.line(0.0, y, canvas_width, y, SEPARATOR);
    }

    if omitted > 0 {
        svg.text(
            canvas_width / 2.0,
            sheets_bottom + NOTE_HEIGHT / 2.0,
            &format!("+{} more sheet(s) not drawn", omitted),
        );
    }

    svg.end();
    svg.into_string()
}

/// Render the layout of a box quote.
pub fn render_layout_svg(quote: &QuoteResult) -> String {
    let total_parts = quote.dimensions.len() * quote.quantity as usize;
    render_sheet_layout_svg(&quote.sheet, &quote.layout, quote.sheets_needed, total_parts)
}
