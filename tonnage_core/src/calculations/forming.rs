//! Forming force model: emboss, dimple, louver, bead, rib.

use crate::calculations::valid_dimensions;
use crate::errors::{Diagnostics, WarningCode};
use crate::operations::{FormItem, FormType};

/// Strain-hardening exponent used when the material does not specify one.
pub const DEFAULT_STRAIN_HARDENING_EXPONENT: f64 = 0.2;

/// Form depth beyond this multiple of thickness is flagged as questionable.
pub const MAX_SAFE_DEPTH_RATIO: f64 = 4.0;

impl FormType {
    /// Empirically fitted per-type factor, scaled by the depth-to-thickness
    /// ratio. The constants are industry calibration values, not derivable.
    pub fn factor(self, depth_to_thickness: f64) -> f64 {
        match self {
            FormType::Emboss => 1.2 + 0.1 * (depth_to_thickness / 3.0).min(0.3),
            FormType::Dimple => 1.0 + 0.05 * (depth_to_thickness / 3.0).min(0.2),
            FormType::Louver => 1.4 + 0.1 * (depth_to_thickness / 2.0).min(0.4),
            FormType::Bead => 1.1 + 0.05 * (depth_to_thickness / 3.0).min(0.3),
            FormType::Rib => 1.3 + 0.1 * (depth_to_thickness / 2.0).min(0.3),
        }
    }

    /// Sharp-cornered features need more force.
    pub fn corner_factor(self) -> f64 {
        match self {
            FormType::Emboss | FormType::Rib => 1.1,
            _ => 1.0,
        }
    }
}

/// Tonnage for one form item (its full quantity).
///
/// `area × thickness × tensile × depthFactor × typeFactor × strainHardeningFactor
///  × cornerFactor × tempFactor × quantity / 1000`
pub fn form_tonnage(
    form: &FormItem,
    thickness_mm: f64,
    tensile_mpa: f64,
    temp_factor: f64,
    strain_hardening_exponent: Option<f64>,
    diag: &mut Diagnostics,
) -> f64 {
    if !valid_dimensions(&[form.diameter, form.depth, thickness_mm, tensile_mpa]) || form.quantity == 0 {
        diag.warn(
            WarningCode::InvalidGeometry,
            "form has non-positive dimensions, contributing zero",
            format!(
                "diameter={} depth={} thickness={thickness_mm} tensile={tensile_mpa}",
                form.diameter, form.depth
            ),
        );
        return 0.0;
    }

    let max_safe_depth = thickness_mm * MAX_SAFE_DEPTH_RATIO;
    if form.depth > max_safe_depth {
        diag.warn(
            WarningCode::ImplausibleGeometry,
            format!(
                "form depth {}mm exceeds recommended maximum {max_safe_depth}mm for thickness {thickness_mm}mm",
                form.depth
            ),
            format!("depth={} maxSafeDepth={max_safe_depth}", form.depth),
        );
    }

    let area = std::f64::consts::PI * (form.diameter / 2.0).powi(2);

    let depth_to_thickness = form.depth / thickness_mm;
    let depth_factor = 0.5
        + 0.3 * (form.depth / form.diameter).powf(1.3)
        + 0.1 * (depth_to_thickness / 5.0).min(1.0);

    let n = strain_hardening_exponent.unwrap_or(DEFAULT_STRAIN_HARDENING_EXPONENT);
    let strain_hardening_factor = 1.0 + n * 0.5;

    area * thickness_mm
        * tensile_mpa
        * depth_factor
        * form.form_type.factor(depth_to_thickness)
        * strain_hardening_factor
        * form.form_type.corner_factor()
        * temp_factor
        * f64::from(form.quantity)
        / 1000.0
}
