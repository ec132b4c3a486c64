//! Part derivation, shelf packing and sheet selection.

mod dimensions;
mod packer;
mod panel;
mod selection;

pub use dimensions::calculate_dimensions;
pub use packer::fit_parts_on_sheet;
pub use panel::calculate_panel_yield;
pub use selection::select_optimal_sheet;
