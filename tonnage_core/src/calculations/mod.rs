//! # Force Models
//!
//! The per-operation tonnage formulas. Each model is a pure function from
//! geometry, thickness (mm), tensile strength (MPa) and the temperature
//! factor to a force in metric tons. The `/ 1000` in every formula is the
//! domain's adopted MPa·mm² → metric-ton normalization and must not change.
//!
//! Invalid geometry (non-positive or non-finite dimensions) never aborts a
//! batch: the offending item contributes zero and a warning is recorded.
//! Physically questionable but computable geometry (draw ratio past the
//! limiting drawing ratio, very deep forms) is computed anyway, with a
//! warning.

pub mod bending;
pub mod cutting;
pub mod drawing;
pub mod forming;

pub use bending::bend_tonnage;
pub use cutting::{hole_tonnage, perimeter_tonnage};
pub use drawing::draw_tonnage;
pub use forming::form_tonnage;

/// Reverse (return-stroke) tonnage: a material-specific fraction of the
/// forward total.
pub fn reverse_tonnage(total_forward: f64, reverse_factor: f64) -> f64 {
    total_forward * reverse_factor
}

/// True when every value is finite and strictly positive.
pub(crate) fn valid_dimensions(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_tonnage() {
        assert_eq!(reverse_tonnage(400.0, 0.7), 280.0);
        assert_eq!(reverse_tonnage(0.0, 0.7), 0.0);
    }

    #[test]
    fn test_valid_dimensions() {
        assert!(valid_dimensions(&[1.0, 2.0]));
        assert!(!valid_dimensions(&[1.0, 0.0]));
        assert!(!valid_dimensions(&[-1.0]));
        assert!(!valid_dimensions(&[f64::NAN]));
        assert!(!valid_dimensions(&[f64::INFINITY]));
    }
}
