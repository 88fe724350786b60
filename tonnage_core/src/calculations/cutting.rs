//! Cutting force models: perimeter cutting and hole punching.

use crate::calculations::valid_dimensions;
use crate::errors::{Diagnostics, WarningCode};
use crate::operations::{HoleItem, HoleShape};

/// Tonnage for cutting a perimeter of `length_mm`.
///
/// `length × thickness × tensile × tempFactor / 1000`
pub fn perimeter_tonnage(
    length_mm: f64,
    thickness_mm: f64,
    tensile_mpa: f64,
    temp_factor: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if !valid_dimensions(&[length_mm, thickness_mm, tensile_mpa]) {
        diag.warn(
            WarningCode::InvalidGeometry,
            "perimeter cut has non-positive dimensions, contributing zero",
            format!("length={length_mm} thickness={thickness_mm} tensile={tensile_mpa}"),
        );
        return 0.0;
    }
    length_mm * thickness_mm * tensile_mpa * temp_factor / 1000.0
}

/// Cut perimeter of one hole, mm.
pub fn hole_perimeter(shape: HoleShape, diameter_mm: f64, width_mm: Option<f64>) -> f64 {
    match shape {
        HoleShape::Circular => std::f64::consts::PI * diameter_mm,
        HoleShape::Square => 4.0 * diameter_mm,
        HoleShape::Rectangular => {
            let width = diameter_mm;
            let height = width_mm.unwrap_or(diameter_mm * 0.8);
            2.0 * (width + height)
        }
    }
}

/// Tonnage for punching one hole item (its full quantity).
///
/// `perimeter × thickness × tensile × tempFactor × quantity / 1000`
pub fn hole_tonnage(
    hole: &HoleItem,
    thickness_mm: f64,
    tensile_mpa: f64,
    temp_factor: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if !valid_dimensions(&[hole.diameter, thickness_mm, tensile_mpa]) || hole.quantity == 0 {
        diag.warn(
            WarningCode::InvalidGeometry,
            "hole has non-positive dimensions, contributing zero",
            format!(
                "diameter={} thickness={thickness_mm} quantity={}",
                hole.diameter, hole.quantity
            ),
        );
        return 0.0;
    }

    let perimeter = hole_perimeter(hole.shape, hole.diameter, hole.width);
    perimeter * thickness_mm * tensile_mpa * temp_factor * f64::from(hole.quantity) / 1000.0
}
