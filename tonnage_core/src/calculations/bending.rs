//! Bending force model.

use crate::calculations::valid_dimensions;
use crate::errors::{Diagnostics, WarningCode};
use crate::operations::{BendItem, BendType};

impl BendType {
    /// Tooling-style correction factor.
    pub fn factor(self) -> f64 {
        match self {
            BendType::AirBend => 0.8,
            BendType::Bottoming => 1.2,
            BendType::VBend | BendType::UBend => 1.0,
        }
    }
}

/// Angle correction: unity up to 90°, then +1% per degree past 90.
pub fn angle_factor(angle_deg: f64) -> f64 {
    if angle_deg <= 90.0 {
        1.0
    } else {
        1.0 + (angle_deg - 90.0) * 0.01
    }
}

/// Radius correction: `0.8 + 0.2 × r/t`.
pub fn radius_factor(radius_to_thickness: f64) -> f64 {
    0.8 + 0.2 * radius_to_thickness
}

/// Tonnage for one bend line.
///
/// `length × thickness² × tensile × angleFactor × radiusFactor × typeFactor × tempFactor / 1000`
pub fn bend_tonnage(
    bend: &BendItem,
    thickness_mm: f64,
    tensile_mpa: f64,
    temp_factor: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if !valid_dimensions(&[bend.length, bend.angle, bend.radius_to_thickness, thickness_mm, tensile_mpa]) {
        diag.warn(
            WarningCode::InvalidGeometry,
            "bend has non-positive dimensions, contributing zero",
            format!(
                "length={} angle={} radiusToThickness={} thickness={thickness_mm}",
                bend.length, bend.angle, bend.radius_to_thickness
            ),
        );
        return 0.0;
    }

    bend.length
        * thickness_mm.powi(2)
        * tensile_mpa
        * angle_factor(bend.angle)
        * radius_factor(bend.radius_to_thickness)
        * bend.bend_type.factor()
        * temp_factor
        / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bend(length: f64, angle: f64, ratio: f64, bend_type: BendType) -> BendItem {
        BendItem {
            bend_type,
            length,
            angle,
            radius_to_thickness: ratio,
            ..BendItem::new()
        }
    }

    #[test]
    fn test_angle_factor() {
        assert_eq!(angle_factor(45.0), 1.0);
        assert_eq!(angle_factor(90.0), 1.0);
        assert!((angle_factor(120.0) - 1.3).abs() < 1e-9);
        assert!((angle_factor(180.0) - 1.9).abs() < 1e-9);
    }

    #[test]
    fn test_radius_factor() {
        assert!((radius_factor(1.0) - 1.0).abs() < 1e-9);
        assert!((radius_factor(2.0) - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_type_factors() {
        assert_eq!(BendType::AirBend.factor(), 0.8);
        assert_eq!(BendType::Bottoming.factor(), 1.2);
        assert_eq!(BendType::VBend.factor(), 1.0);
        assert_eq!(BendType::UBend.factor(), 1.0);
    }

    #[test]
    fn test_bend_formula() {
        // 100 × 1² × 300 × 1.3 × 1.2 × 1.0 × 1.0 / 1000 = 46.8
        let mut diag = Diagnostics::new();
        let t = bend_tonnage(&bend(100.0, 120.0, 2.0, BendType::VBend), 1.0, 300.0, 1.0, &mut diag);
        assert!((t - 46.8).abs() < 1e-9);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_thickness_is_squared() {
        let mut diag = Diagnostics::new();
        let thin = bend_tonnage(&bend(100.0, 90.0, 1.0, BendType::VBend), 1.0, 300.0, 1.0, &mut diag);
        let thick = bend_tonnage(&bend(100.0, 90.0, 1.0, BendType::VBend), 2.0, 300.0, 1.0, &mut diag);
        assert!((thick / thin - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_bend_zeroes_with_warning() {
        let mut diag = Diagnostics::new();
        assert_eq!(
            bend_tonnage(&bend(0.0, 90.0, 1.0, BendType::VBend), 2.0, 400.0, 1.0, &mut diag),
            0.0
        );
        assert!(diag.has(WarningCode::InvalidGeometry));
    }
}
