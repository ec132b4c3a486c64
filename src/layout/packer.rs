//! Greedy shelf packing of parts onto one sheet.

use crate::config::float_cmp::fits_within;
use crate::model::{PartDimension, PlacedPart, Sheet};

/// Place parts on a single sheet, left to right in rows, top to bottom.
///
/// The part list is repeated `quantity` times in order. A part that does not
/// fit in the remaining row width starts a new row under the tallest part of
/// the current row. Packing stops at the first part that does not fit below
/// the last row, so the result is the sheet's capacity for this sequence and
/// may hold fewer than `parts.len() * quantity` entries. Parts are never
/// rotated and row gaps are never backfilled.
pub fn fit_parts_on_sheet(
    parts: &[PartDimension],
    sheet: &Sheet,
    quantity: u32,
) -> Vec<PlacedPart> {
    let total_parts = parts.len() * quantity as usize;
    let mut layout = Vec::new();

    let mut current_x = 0.0;
    let mut current_y = 0.0;
    let mut max_height_in_row: f64 = 0.0;

    for part in parts.iter().cycle().take(total_parts) {
        if !fits_within(current_x + part.width, sheet.width) {
            current_x = 0.0;
            current_y += max_height_in_row;
            max_height_in_row = 0.0;
        }

        // Sheet is full, or the part is wider than the sheet itself
        if !fits_within(current_y + part.height, sheet.height)
            || !fits_within(current_x + part.width, sheet.width)
        {
            tracing::trace!(
                "Sheet {} full after {} of {} part(s)",
                sheet.name,
                layout.len(),
                total_parts
            );
            return layout;
        }

        layout.push(PlacedPart {
            part: part.part,
            x: current_x,
            y: current_y,
            width: part.width,
            height: part.height,
        });

        current_x += part.width;
        max_height_in_row = max_height_in_row.max(part.height);
    }

    layout
}
