//! Layout drawings and order documents.

mod order;
mod svg;

pub use order::render_order_text;
pub use svg::{render_layout_svg, render_sheet_layout_svg, SvgWriter, MAX_DRAWN_SHEETS, PART_COLORS};
