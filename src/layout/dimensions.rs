//! Box panel derivation.

use crate::config::Thickness;
use crate::model::{PartDimension, PartName};

/// Derive the six flat panels of a box.
///
/// Top and bottom cover the full `width x depth`. The four walls sit between
/// them, so their vertical side loses two thicknesses; the left and right
/// walls also sit between front and back and lose two thicknesses of depth.
///
/// Inputs are not checked here. A thickness large relative to `height` or
/// `depth` yields zero or negative sides.
pub fn calculate_dimensions(
    width: f64,
    height: f64,
    depth: f64,
    thickness: Thickness,
) -> Vec<PartDimension> {
    let t2 = thickness.mm() * 2.0;

    PartName::ALL
        .iter()
        .map(|&part| match part {
            PartName::Top | PartName::Bottom => PartDimension::new(part, width, depth),
            PartName::Left | PartName::Right => {
                PartDimension::new(part, depth - t2, height - t2)
            }
            PartName::Front | PartName::Back => PartDimension::new(part, width, height - t2),
        })
        .collect()
}
