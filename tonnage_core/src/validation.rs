//! # Input Validation
//!
//! Clamp layer applied before values reach the calculation engine.
//!
//! The engine itself tolerates out-of-range inputs (degrading to zero with a
//! warning), but the hosting layer is expected to run its inputs through
//! these clamps first. Every correction is reported through the
//! [`Diagnostics`] channel as a [`WarningCode::ClampedInput`] so the caller
//! can show what was adjusted.

use crate::errors::{Diagnostics, WarningCode};
use crate::units::UnitSystem;

/// Thickness bounds, mm / inches.
pub const THICKNESS_RANGE_MM: (f64, f64) = (0.1, 100.0);
pub const THICKNESS_RANGE_IN: (f64, f64) = (0.004, 4.0);

/// Temperature bounds, °C / °F.
pub const TEMPERATURE_RANGE_C: (f64, f64) = (-50.0, 1200.0);
pub const TEMPERATURE_RANGE_F: (f64, f64) = (-58.0, 2192.0);

/// Perimeter length bounds, mm / inches.
pub const PERIMETER_RANGE_MM: (f64, f64) = (1.0, 10000.0);
pub const PERIMETER_RANGE_IN: (f64, f64) = (0.04, 400.0);

/// Hole diameter bounds, mm / inches.
pub const HOLE_DIAMETER_RANGE_MM: (f64, f64) = (0.5, 500.0);
pub const HOLE_DIAMETER_RANGE_IN: (f64, f64) = (0.02, 20.0);

/// Minimum bend radius-to-thickness ratio.
pub const MIN_RADIUS_TO_THICKNESS: f64 = 0.5;

fn clamp_to_range(
    field: &str,
    value: f64,
    range: (f64, f64),
    fallback: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if !value.is_finite() {
        diag.warn(
            WarningCode::ClampedInput,
            format!("{field} is not a valid number, reset to default"),
            format!("{field}={value} default={fallback}"),
        );
        return fallback;
    }
    if value < range.0 {
        diag.warn(
            WarningCode::ClampedInput,
            format!("{field} below minimum, clamped"),
            format!("{field}={value} min={}", range.0),
        );
        return range.0;
    }
    if value > range.1 {
        diag.warn(
            WarningCode::ClampedInput,
            format!("{field} above maximum, clamped"),
            format!("{field}={value} max={}", range.1),
        );
        return range.1;
    }
    value
}

/// Clamp thickness to its validated range for the unit system.
pub fn clamp_thickness(value: f64, system: UnitSystem, diag: &mut Diagnostics) -> f64 {
    let (range, fallback) = match system {
        UnitSystem::Metric => (THICKNESS_RANGE_MM, 1.0),
        UnitSystem::Imperial => (THICKNESS_RANGE_IN, 0.04),
    };
    if value.is_finite() && value <= 0.0 {
        diag.warn(
            WarningCode::ClampedInput,
            "thickness must be positive, reset to default",
            format!("thickness={value} default={fallback}"),
        );
        return fallback;
    }
    clamp_to_range("thickness", value, range, fallback, diag)
}

/// Clamp temperature to its validated range for the unit system.
pub fn clamp_temperature(value: f64, system: UnitSystem, diag: &mut Diagnostics) -> f64 {
    let (range, fallback) = match system {
        UnitSystem::Metric => (TEMPERATURE_RANGE_C, 20.0),
        UnitSystem::Imperial => (TEMPERATURE_RANGE_F, 68.0),
    };
    clamp_to_range("temperature", value, range, fallback, diag)
}

/// Clamp perimeter length to its validated range for the unit system.
pub fn clamp_perimeter_length(value: f64, system: UnitSystem, diag: &mut Diagnostics) -> f64 {
    let (range, fallback) = match system {
        UnitSystem::Metric => (PERIMETER_RANGE_MM, 100.0),
        UnitSystem::Imperial => (PERIMETER_RANGE_IN, 4.0),
    };
    clamp_to_range("perimeterLength", value, range, fallback, diag)
}

/// Clamp hole diameter to its validated range for the unit system.
pub fn clamp_hole_diameter(value: f64, system: UnitSystem, diag: &mut Diagnostics) -> f64 {
    let (range, fallback) = match system {
        UnitSystem::Metric => (HOLE_DIAMETER_RANGE_MM, 10.0),
        UnitSystem::Imperial => (HOLE_DIAMETER_RANGE_IN, 0.4),
    };
    clamp_to_range("holeDiameter", value, range, fallback, diag)
}

/// Clamp bend angle to (0, 180]; invalid values reset to 90°.
pub fn clamp_bend_angle(value: f64, diag: &mut Diagnostics) -> f64 {
    if !value.is_finite() || value <= 0.0 || value > 180.0 {
        diag.warn(
            WarningCode::ClampedInput,
            "bend angle must be in (0, 180], reset to default",
            format!("angle={value} default=90"),
        );
        return 90.0;
    }
    value
}

/// Clamp radius-to-thickness ratio to ≥ 0.5; invalid values reset to 1.0.
pub fn clamp_radius_to_thickness(value: f64, diag: &mut Diagnostics) -> f64 {
    if !value.is_finite() || value < MIN_RADIUS_TO_THICKNESS {
        diag.warn(
            WarningCode::ClampedInput,
            "radius-to-thickness ratio must be at least 0.5, reset to default",
            format!("radiusToThickness={value} default=1"),
        );
        return 1.0;
    }
    value
}

/// Quantity must be at least 1.
pub fn clamp_quantity(value: u32, diag: &mut Diagnostics) -> u32 {
    if value < 1 {
        diag.warn(
            WarningCode::ClampedInput,
            "quantity must be at least 1, reset to default",
            format!("quantity={value} default=1"),
        );
        return 1;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thickness_within_range_passes_through() {
        let mut diag = Diagnostics::new();
        assert_eq!(clamp_thickness(2.0, UnitSystem::Metric, &mut diag), 2.0);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_thickness_clamped_with_warning() {
        let mut diag = Diagnostics::new();
        assert_eq!(clamp_thickness(500.0, UnitSystem::Metric, &mut diag), 100.0);
        assert_eq!(clamp_thickness(0.001, UnitSystem::Metric, &mut diag), 0.1);
        assert_eq!(diag.count(WarningCode::ClampedInput), 2);
    }

    #[test]
    fn test_thickness_nonpositive_resets_to_default() {
        let mut diag = Diagnostics::new();
        assert_eq!(clamp_thickness(-3.0, UnitSystem::Metric, &mut diag), 1.0);
        assert_eq!(clamp_thickness(f64::NAN, UnitSystem::Metric, &mut diag), 1.0);
        assert!(diag.has(WarningCode::ClampedInput));
    }

    #[test]
    fn test_imperial_ranges() {
        let mut diag = Diagnostics::new();
        assert_eq!(clamp_thickness(10.0, UnitSystem::Imperial, &mut diag), 4.0);
        assert_eq!(
            clamp_temperature(3000.0, UnitSystem::Imperial, &mut diag),
            2192.0
        );
        assert_eq!(
            clamp_hole_diameter(50.0, UnitSystem::Imperial, &mut diag),
            20.0
        );
    }

    #[test]
    fn test_temperature_bounds() {
        let mut diag = Diagnostics::new();
        assert_eq!(clamp_temperature(-100.0, UnitSystem::Metric, &mut diag), -50.0);
        assert_eq!(clamp_temperature(20.0, UnitSystem::Metric, &mut diag), 20.0);
        assert_eq!(clamp_temperature(5000.0, UnitSystem::Metric, &mut diag), 1200.0);
    }

    #[test]
    fn test_bend_clamps() {
        let mut diag = Diagnostics::new();
        assert_eq!(clamp_bend_angle(90.0, &mut diag), 90.0);
        assert_eq!(clamp_bend_angle(181.0, &mut diag), 90.0);
        assert_eq!(clamp_bend_angle(0.0, &mut diag), 90.0);
        assert_eq!(clamp_radius_to_thickness(0.4, &mut diag), 1.0);
        assert_eq!(clamp_radius_to_thickness(2.0, &mut diag), 2.0);
        assert_eq!(diag.count(WarningCode::ClampedInput), 3);
    }

    #[test]
    fn test_quantity_floor() {
        let mut diag = Diagnostics::new();
        assert_eq!(clamp_quantity(0, &mut diag), 1);
        assert_eq!(clamp_quantity(5, &mut diag), 5);
        assert_eq!(diag.count(WarningCode::ClampedInput), 1);
    }
}
