//! Drawing force model.

use crate::calculations::forming::DEFAULT_STRAIN_HARDENING_EXPONENT;
use crate::calculations::valid_dimensions;
use crate::errors::{Diagnostics, WarningCode};
use crate::operations::{DrawItem, DrawType};

/// Friction coefficient used when the material does not specify one.
pub const DEFAULT_DRAW_FRICTION_COEFFICIENT: f64 = 0.15;

impl DrawType {
    /// Per-type factor; corner and flow effects grow with draw depth.
    pub fn factor(self, depth_ratio: f64) -> f64 {
        match self {
            DrawType::Round => 1.0,
            DrawType::Rectangular => 1.1 + 0.1 * depth_ratio.min(1.0),
            DrawType::Irregular => 1.2 + 0.15 * depth_ratio.min(1.0),
            DrawType::Tapered => 0.9 + 0.1 * depth_ratio.min(1.0),
        }
    }
}

/// Limiting drawing ratio for the material: `2.5 − tensile/1000 + 0.5×n`,
/// clamped to [1.8, 2.2]. Stronger materials draw less deep; strain
/// hardening extends the limit.
pub fn limiting_drawing_ratio(tensile_mpa: f64, strain_hardening_exponent: f64) -> f64 {
    (2.5 - tensile_mpa / 1000.0 + strain_hardening_exponent * 0.5).clamp(1.8, 2.2)
}

/// Tonnage for one draw item (its full quantity).
///
/// `area × thickness × tensile × depthFactor × typeFactor × tempFactor
///  × frictionFactor × holddownFactor × ldrFactor × quantity / 1000`
pub fn draw_tonnage(
    draw: &DrawItem,
    thickness_mm: f64,
    tensile_mpa: f64,
    temp_factor: f64,
    strain_hardening_exponent: Option<f64>,
    friction_coefficient: Option<f64>,
    diag: &mut Diagnostics,
) -> f64 {
    if !valid_dimensions(&[draw.diameter, draw.depth, thickness_mm, tensile_mpa]) || draw.quantity == 0 {
        diag.warn(
            WarningCode::InvalidGeometry,
            "draw has non-positive dimensions, contributing zero",
            format!(
                "diameter={} depth={} thickness={thickness_mm} tensile={tensile_mpa}",
                draw.diameter, draw.depth
            ),
        );
        return 0.0;
    }

    let n = strain_hardening_exponent.unwrap_or(DEFAULT_STRAIN_HARDENING_EXPONENT);
    let ldr = limiting_drawing_ratio(tensile_mpa, n);
    let draw_ratio = draw.depth / draw.diameter;

    if draw_ratio > ldr {
        diag.warn(
            WarningCode::ImplausibleGeometry,
            format!(
                "draw ratio {draw_ratio:.2} exceeds the limiting drawing ratio {ldr:.2} for {tensile_mpa} MPa"
            ),
            format!("drawRatio={draw_ratio:.4} ldr={ldr:.4}"),
        );
    }

    // wrinkling/fracture plausibility checks on thickness vs diameter
    if thickness_mm < draw.diameter * 0.005 {
        diag.warn(
            WarningCode::ImplausibleGeometry,
            format!(
                "material may be too thin ({thickness_mm}mm) for draw diameter {}mm, wrinkling may occur",
                draw.diameter
            ),
            format!("thickness={thickness_mm} diameter={}", draw.diameter),
        );
    } else if thickness_mm > draw.diameter * 0.1 {
        diag.warn(
            WarningCode::ImplausibleGeometry,
            format!(
                "material may be too thick ({thickness_mm}mm) for draw diameter {}mm, fracturing may occur",
                draw.diameter
            ),
            format!("thickness={thickness_mm} diameter={}", draw.diameter),
        );
    }

    let area = std::f64::consts::PI * (draw.diameter / 2.0).powi(2);

    // force escalates quadratically once the draw approaches the LDR
    let ldr_factor = if draw_ratio >= ldr * 0.8 {
        1.0 + ((draw_ratio - ldr * 0.8) / (ldr * 0.2)).powi(2) * 0.5
    } else {
        1.0
    };

    let depth_factor = 0.7 + 0.3 * draw_ratio.powf(1.5) + 0.3 * draw_ratio;

    let friction = friction_coefficient.unwrap_or(DEFAULT_DRAW_FRICTION_COEFFICIENT);
    let friction_factor = 1.0 + friction * 4.0;

    let holddown_factor = 1.0 + 0.1 * (draw_ratio * 2.0).min(0.5);

    area * thickness_mm
        * tensile_mpa
        * depth_factor
        * draw.draw_type.factor(draw_ratio)
        * temp_factor
        * friction_factor
        * holddown_factor
        * ldr_factor
        * f64::from(draw.quantity)
        / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(draw_type: DrawType, diameter: f64, depth: f64) -> DrawItem {
        DrawItem {
            draw_type,
            diameter,
            depth,
            quantity: 1,
            ..DrawItem::new()
        }
    }

    #[test]
    fn test_ldr_clamped() {
        assert_eq!(limiting_drawing_ratio(400.0, 0.2), 2.2);
        assert_eq!(limiting_drawing_ratio(1000.0, 0.0), 1.8);
        // inside the clamp: 2.5 − 0.9 + 0.1 = 1.7 → floored at 1.8
        assert_eq!(limiting_drawing_ratio(900.0, 0.2), 1.8);
        let mid = limiting_drawing_ratio(600.0, 0.2);
        assert!((mid - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_type_factors() {
        assert_eq!(DrawType::Round.factor(0.5), 1.0);
        assert!((DrawType::Rectangular.factor(0.5) - 1.15).abs() < 1e-9);
        assert!((DrawType::Irregular.factor(2.0) - 1.35).abs() < 1e-9);
        assert!((DrawType::Tapered.factor(0.5) - 0.95).abs() < 1e-9);
        assert!(DrawType::Tapered.factor(0.5) < DrawType::Round.factor(0.5));
    }

    #[test]
    fn test_draw_tonnage_known_value() {
        let mut diag = Diagnostics::new();
        let item = draw(DrawType::Round, 50.0, 20.0);
        let t = draw_tonnage(&item, 2.0, 400.0, 1.0, Some(0.2), Some(0.35), &mut diag);

        let area = std::f64::consts::PI * 625.0;
        let ratio: f64 = 0.4;
        let depth_factor = 0.7 + 0.3 * ratio.powf(1.5) + 0.3 * ratio;
        let friction_factor = 1.0 + 0.35 * 4.0;
        let holddown_factor = 1.0 + 0.1 * 0.5;
        let expected = area * 2.0 * 400.0 * depth_factor * 1.0 * 1.0 * friction_factor * holddown_factor * 1.0 / 1000.0;
        assert!((t - expected).abs() < 1e-6);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_exceeding_ldr_warns_but_computes() {
        let mut diag = Diagnostics::new();
        let t = draw_tonnage(&draw(DrawType::Round, 10.0, 30.0), 1.0, 400.0, 1.0, None, None, &mut diag);
        assert!(t > 0.0);
        assert!(diag.has(WarningCode::ImplausibleGeometry));
    }

    /// Expected round-draw tonnage with `ldr_factor` pinned at 1.
    fn no_escalation_prediction(diameter: f64, depth: f64, thickness: f64, tensile: f64) -> f64 {
        let area = std::f64::consts::PI * (diameter / 2.0).powi(2);
        let ratio = depth / diameter;
        let depth_factor = 0.7 + 0.3 * ratio.powf(1.5) + 0.3 * ratio;
        let friction_factor = 1.0 + DEFAULT_DRAW_FRICTION_COEFFICIENT * 4.0;
        let holddown_factor = 1.0 + 0.1 * (ratio * 2.0).min(0.5);
        area * thickness * tensile * depth_factor * friction_factor * holddown_factor / 1000.0
    }

    #[test]
    fn test_ldr_escalation_kicks_in_near_limit() {
        let mut diag = Diagnostics::new();
        // ldr = 2.2 for 400 MPa/n=0.2, escalation starts at ratio 1.76

        // below the knee (ratio 1.7) the escalation factor is exactly 1
        let below = draw_tonnage(&draw(DrawType::Round, 10.0, 17.0), 0.5, 400.0, 1.0, None, None, &mut diag);
        assert!((below - no_escalation_prediction(10.0, 17.0, 0.5, 400.0)).abs() < 1e-9);

        // past the knee (ratio 2.0) the tonnage exceeds the unescalated
        // prediction by the quadratic factor
        let above = draw_tonnage(&draw(DrawType::Round, 10.0, 20.0), 0.5, 400.0, 1.0, None, None, &mut diag);
        let escalation = above / no_escalation_prediction(10.0, 20.0, 0.5, 400.0);
        let expected = 1.0 + ((2.0 - 1.76_f64) / 0.44).powi(2) * 0.5;
        assert!((escalation - expected).abs() < 1e-9);
        assert!(escalation > 1.1);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_thin_material_wrinkling_warning() {
        let mut diag = Diagnostics::new();
        draw_tonnage(&draw(DrawType::Round, 100.0, 30.0), 0.3, 400.0, 1.0, None, None, &mut diag);
        assert!(diag.has(WarningCode::ImplausibleGeometry));
    }

    #[test]
    fn test_invalid_draw_zeroes_with_warning() {
        let mut diag = Diagnostics::new();
        assert_eq!(
            draw_tonnage(&draw(DrawType::Round, 0.0, 20.0), 2.0, 400.0, 1.0, None, None, &mut diag),
            0.0
        );
        assert!(diag.has(WarningCode::InvalidGeometry));
    }
}
