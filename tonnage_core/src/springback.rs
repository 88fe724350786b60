//! # Springback Model
//!
//! Elastic angular relaxation after a bend is released, and the overbend
//! (compensation) needed to land on the target angle anyway.
//!
//! The springback factor grows with strain hardening, yield-to-tensile
//! ratio, bend-radius-to-thickness ratio and anisotropy. Missing material
//! properties fall back to fixed defaults (n=0.2, Y/T=0.7, E=200 GPa,
//! r=1.0).

use serde::{Deserialize, Serialize};

use crate::materials::SelectedMaterial;

/// Fallback strain-hardening exponent.
const DEFAULT_N: f64 = 0.2;
/// Fallback elastic modulus, GPa.
const DEFAULT_MODULUS: f64 = 200.0;
/// Fallback anisotropy ratio.
const DEFAULT_ANISOTROPY: f64 = 1.0;
/// Fallback yield strength, MPa.
const DEFAULT_YIELD_STRENGTH: f64 = 300.0;

/// Qualitative springback severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpringbackSeverity {
    Low,
    Medium,
    High,
}

impl SpringbackSeverity {
    /// Severity from strain hardening and yield-to-tensile ratio.
    pub fn of_material(strain_hardening_exponent: f64, yield_to_tensile: f64) -> Self {
        if strain_hardening_exponent > 0.2 || yield_to_tensile > 0.8 {
            SpringbackSeverity::High
        } else if strain_hardening_exponent > 0.15 || yield_to_tensile > 0.7 {
            SpringbackSeverity::Medium
        } else {
            SpringbackSeverity::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpringbackSeverity::Low => "Low",
            SpringbackSeverity::Medium => "Medium",
            SpringbackSeverity::High => "High",
        }
    }

    /// Recommended overbend range for this severity.
    pub fn compensation_range(self) -> &'static str {
        match self {
            SpringbackSeverity::Low => "2-5%",
            SpringbackSeverity::Medium => "5-10%",
            SpringbackSeverity::High => "10-15%",
        }
    }
}

impl std::fmt::Display for SpringbackSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advisory suggestions bundled with a springback estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringbackSuggestions {
    pub severity: SpringbackSeverity,
    /// Datasheet characterization when present, otherwise the severity name
    pub characteristics: String,
    pub compensation: String,
    pub tips: Vec<String>,
    pub min_bend_radius: String,
}

/// Springback prediction for one bend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringbackEstimate {
    /// Springback angle, degrees
    pub angle: f64,
    /// Angle to bend to in order to land on the target, degrees
    pub compensation_angle: f64,
    /// Springback as a percentage of the target angle
    pub percentage: f64,
    /// Bend radius over thickness, as used by the factor
    pub radius_to_thickness: f64,
    pub suggestions: SpringbackSuggestions,
}

fn material_inputs(material: &SelectedMaterial) -> (f64, f64, f64, f64) {
    let props = material.active_properties();
    let n = props.strain_hardening_exponent.unwrap_or(DEFAULT_N);
    let modulus = props.modulus.unwrap_or(DEFAULT_MODULUS);
    let anisotropy = props.anisotropy_ratio.unwrap_or(DEFAULT_ANISOTROPY);
    let yield_strength = if material.yield_strength > 0.0 {
        material.yield_strength
    } else {
        DEFAULT_YIELD_STRENGTH
    };
    (n, modulus, anisotropy, yield_strength)
}

/// Springback angle in degrees for a bend to `target_angle_deg`.
pub fn springback_angle(
    target_angle_deg: f64,
    thickness_mm: f64,
    bend_radius_mm: f64,
    material: &SelectedMaterial,
) -> f64 {
    let (n, modulus, anisotropy, yield_strength) = material_inputs(material);
    let yield_to_tensile = material.yield_to_tensile_ratio();

    let target_rad = target_angle_deg.to_radians();
    let radius_to_thickness = bend_radius_mm / thickness_mm;

    let springback_factor = 3.0
        * n
        * yield_to_tensile.powf(0.8)
        * radius_to_thickness.sqrt()
        * (0.7 + 0.3 * anisotropy);

    let springback_rad = target_rad * springback_factor * (yield_strength / modulus);
    springback_rad.to_degrees()
}

/// Overbend target to land on `target_angle_deg` after release.
pub fn compensation_angle(
    target_angle_deg: f64,
    thickness_mm: f64,
    bend_radius_mm: f64,
    material: &SelectedMaterial,
) -> f64 {
    target_angle_deg + springback_angle(target_angle_deg, thickness_mm, bend_radius_mm, material)
}

/// Springback as a percentage of the target angle; 0 when the target is 0.
pub fn springback_percentage(
    target_angle_deg: f64,
    thickness_mm: f64,
    bend_radius_mm: f64,
    material: &SelectedMaterial,
) -> f64 {
    if target_angle_deg == 0.0 {
        return 0.0;
    }
    springback_angle(target_angle_deg, thickness_mm, bend_radius_mm, material) / target_angle_deg
        * 100.0
}

/// Advisory suggestions for the selected material.
pub fn suggestions(material: &SelectedMaterial) -> SpringbackSuggestions {
    let props = material.active_properties();
    let n = props.strain_hardening_exponent.unwrap_or(DEFAULT_N);
    let severity = SpringbackSeverity::of_material(n, material.yield_to_tensile_ratio());
    let fc = &material.forming_characteristics;

    let clearance = fc.recommended_die_clearance.as_deref().unwrap_or("6-8%");
    let lubricant = fc.lubricant_type.as_deref().unwrap_or("appropriate");
    let speed = fc
        .recommended_punch_speed
        .as_deref()
        .unwrap_or("manufacturer recommended speed");

    SpringbackSuggestions {
        severity,
        characteristics: fc
            .springback
            .clone()
            .unwrap_or_else(|| severity.as_str().to_string()),
        compensation: format!(
            "Overbend by {} for optimal results",
            severity.compensation_range()
        ),
        tips: vec![
            format!("Maintain consistent {clearance} die clearance"),
            format!("Use {lubricant} lubricant to reduce friction"),
            format!("Set punch speed to {speed}"),
        ],
        min_bend_radius: props
            .minimum_bend_radius
            .clone()
            .or_else(|| fc.minimum_bend_radius.clone())
            .unwrap_or_else(|| "1.5t".to_string()),
    }
}

/// Full springback estimate for one bend.
pub fn estimate(
    target_angle_deg: f64,
    thickness_mm: f64,
    bend_radius_mm: f64,
    material: &SelectedMaterial,
) -> SpringbackEstimate {
    let angle = springback_angle(target_angle_deg, thickness_mm, bend_radius_mm, material);
    SpringbackEstimate {
        angle,
        compensation_angle: target_angle_deg + angle,
        percentage: springback_percentage(target_angle_deg, thickness_mm, bend_radius_mm, material),
        radius_to_thickness: bend_radius_mm / thickness_mm,
        suggestions: suggestions(material),
    }
}
