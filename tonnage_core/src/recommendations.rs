//! # Process Recommendations
//!
//! Advisory process parameters per operation family, pulled from the
//! material's forming characteristics with fixed fallbacks, plus a scalar
//! tonnage efficiency factor.
//!
//! Everything here is advisory text for the operator; nothing feeds back
//! into the force models.

use serde::{Deserialize, Serialize};

use crate::materials::SelectedMaterial;
use crate::operations::OperationKind;
use crate::temperature::TemperatureRegime;

/// Operation-specific advisory block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum SpecificRecommendations {
    #[serde(rename_all = "camelCase")]
    Cutting {
        edge_quality: String,
        tool_life: String,
    },
    #[serde(rename_all = "camelCase")]
    Punching {
        minimum_diameter: String,
        recommended_spacing: String,
        tool_life: String,
    },
    #[serde(rename_all = "camelCase")]
    Bending {
        minimum_bend_radius: String,
        springback: String,
        grain_direction: String,
    },
    #[serde(rename_all = "camelCase")]
    Forming {
        surface_finish: String,
        max_depth: String,
        stretchability: String,
    },
    #[serde(rename_all = "camelCase")]
    Drawing {
        draw_ratio: String,
        blank_holder_pressure: String,
        surface_finish: String,
    },
    General,
}

/// Full recommendation block for one operation family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRecommendations {
    pub title: String,
    pub description: String,
    pub die_clearance: String,
    pub punch_speed: String,
    pub blank_holding_force: String,
    pub lubricant_type: String,
    pub grain_direction_effect: String,
    pub temperature_range: String,
    pub max_forming_depth: String,
    pub specific: SpecificRecommendations,
    pub tonnage_efficiency_factor: f64,
}

fn parse_leading_f64(text: &str) -> Option<f64> {
    let numeric: String = text
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    numeric.parse().ok()
}

/// Nudge a die-clearance percentage by tensile strength: high-strength
/// materials get more clearance, soft ones slightly less.
pub fn adjust_clearance_for_cutting(base_clearance: &str, tensile_mpa: f64) -> String {
    let base_value = parse_leading_f64(base_clearance).unwrap_or(6.0);
    let adjustment = if tensile_mpa > 600.0 {
        1.5
    } else if tensile_mpa < 300.0 {
        -0.5
    } else {
        0.0
    };
    format!("{:.1}%", base_value + adjustment)
}

fn edge_quality(tensile_mpa: f64, elongation: f64) -> &'static str {
    if tensile_mpa > 600.0 || elongation < 10.0 {
        "Consider secondary deburring operation"
    } else if tensile_mpa > 400.0 || elongation < 20.0 {
        "Standard edge quality expected"
    } else {
        "Good edge quality expected"
    }
}

fn tool_life(hardness: f64, friction: f64) -> &'static str {
    if hardness > 200.0 || friction > 0.5 {
        "Reduced tool life expected - increase inspection frequency"
    } else if hardness > 100.0 || friction > 0.4 {
        "Average tool life expected"
    } else {
        "Above average tool life expected"
    }
}

fn grain_direction(effect: &str) -> &'static str {
    match effect {
        "Significant" | "Very Significant" | "Extremely Critical" => {
            "Align bend axis perpendicular to grain direction"
        }
        "Moderate" => "Consider grain direction for critical dimensions",
        _ => "Grain direction has minimal impact",
    }
}

fn surface_finish(roughness: f64) -> &'static str {
    if roughness < 0.5 {
        "High surface quality expected"
    } else if roughness < 1.0 {
        "Standard surface quality expected"
    } else {
        "Rougher surface finish expected"
    }
}

fn stretchability(elongation: f64, strain_hardening: f64) -> &'static str {
    let stretch_index = (elongation / 20.0) * (strain_hardening / 0.2);
    if stretch_index > 1.5 {
        "Excellent stretchability"
    } else if stretch_index > 0.8 {
        "Good stretchability"
    } else {
        "Limited stretchability"
    }
}

fn max_draw_ratio(anisotropy: f64, strain_hardening: f64) -> &'static str {
    let draw_index = anisotropy * (1.0 + strain_hardening * 2.0);
    if draw_index > 2.0 {
        "2.2 - 2.4 LDR"
    } else if draw_index > 1.5 {
        "2.0 - 2.2 LDR"
    } else if draw_index > 1.0 {
        "1.8 - 2.0 LDR"
    } else {
        "1.6 - 1.8 LDR"
    }
}

fn blank_holder_pressure(holding_force: &str) -> &'static str {
    match holding_force {
        "Very High" => "3.0 - 4.0 MPa",
        "High" => "2.0 - 3.0 MPa",
        "Medium" | "Medium-High" | "Moderate" | "Moderate to High" => "1.5 - 2.0 MPa",
        "Low" | "Low-Medium" => "1.0 - 1.5 MPa",
        _ => "1.5 - 2.5 MPa",
    }
}

/// Scalar multiplier for press sizing: elevated temperature eases the
/// tonnage requirement, bending and drawing pad it with a safety margin.
pub fn tonnage_efficiency_factor(regime: TemperatureRegime, operation: OperationKind) -> f64 {
    let mut factor: f64 = 1.0;

    match regime {
        TemperatureRegime::Warm => factor *= 0.95,
        TemperatureRegime::Hot => factor *= 0.90,
        TemperatureRegime::Room => {}
    }

    match operation {
        OperationKind::Bend => factor *= 1.05,
        OperationKind::Draw => factor *= 1.10,
        _ => {}
    }

    (factor * 100.0).round() / 100.0
}

/// Generate the recommendation block for one operation family.
///
/// `thickness_mm` feeds the punching-specific minimum hole diameter and
/// spacing advisories.
pub fn generate(
    material: &SelectedMaterial,
    operation: OperationKind,
    thickness_mm: f64,
) -> ProcessRecommendations {
    let props = material.active_properties();
    let fc = &material.forming_characteristics;

    let base_clearance = fc.recommended_die_clearance.as_deref().unwrap_or("6%");
    let hardness = props.hardness.unwrap_or(100.0);
    let friction = props.friction_coefficient.unwrap_or(0.4);
    let elongation = props.elongation.unwrap_or(20.0);
    let roughness = props.surface_roughness.unwrap_or(0.8);
    let n = props.strain_hardening_exponent.unwrap_or(0.2);
    let anisotropy = props.anisotropy_ratio.unwrap_or(1.0);

    let grain_effect = fc.grain_direction_effect.as_deref().unwrap_or("Moderate");
    let holding_force = fc.blank_holding_force.as_deref().unwrap_or("Medium");
    let max_forming_depth = fc
        .max_forming_depth
        .as_deref()
        .unwrap_or("60% of diameter")
        .to_string();

    let mut die_clearance = base_clearance.to_string();

    let (title, description, specific) = match operation {
        OperationKind::Perimeter => {
            die_clearance = adjust_clearance_for_cutting(base_clearance, props.tensile_strength);
            (
                "Cutting Recommendations",
                "Optimal parameters for perimeter cutting operations",
                SpecificRecommendations::Cutting {
                    edge_quality: edge_quality(props.tensile_strength, elongation).to_string(),
                    tool_life: tool_life(hardness, friction).to_string(),
                },
            )
        }
        OperationKind::Hole => {
            die_clearance = adjust_clearance_for_cutting(base_clearance, props.tensile_strength);
            (
                "Punching Recommendations",
                "Optimal parameters for hole punching operations",
                SpecificRecommendations::Punching {
                    minimum_diameter: format!("{}mm", thickness_mm.max(1.5)),
                    recommended_spacing: format!("{}mm", (thickness_mm * 2.0).max(3.0)),
                    tool_life: tool_life(hardness, friction).to_string(),
                },
            )
        }
        OperationKind::Bend => (
            "Bending Recommendations",
            "Optimal parameters for bending operations",
            SpecificRecommendations::Bending {
                minimum_bend_radius: props
                    .minimum_bend_radius
                    .clone()
                    .or_else(|| fc.minimum_bend_radius.clone())
                    .unwrap_or_else(|| "1.5t".to_string()),
                springback: fc.springback.clone().unwrap_or_else(|| "Medium".to_string()),
                grain_direction: grain_direction(grain_effect).to_string(),
            },
        ),
        OperationKind::Form => (
            "Forming Recommendations",
            "Optimal parameters for forming operations",
            SpecificRecommendations::Forming {
                surface_finish: surface_finish(roughness).to_string(),
                max_depth: max_forming_depth.clone(),
                stretchability: stretchability(elongation, n).to_string(),
            },
        ),
        OperationKind::Draw => (
            "Drawing Recommendations",
            "Optimal parameters for drawing operations",
            SpecificRecommendations::Drawing {
                draw_ratio: max_draw_ratio(anisotropy, n).to_string(),
                blank_holder_pressure: blank_holder_pressure(holding_force).to_string(),
                surface_finish: surface_finish(roughness).to_string(),
            },
        ),
        OperationKind::General => (
            "General Recommendations",
            "General process parameters for this material",
            SpecificRecommendations::General,
        ),
    };

    ProcessRecommendations {
        title: title.to_string(),
        description: description.to_string(),
        die_clearance,
        punch_speed: fc
            .recommended_punch_speed
            .clone()
            .unwrap_or_else(|| "150-300mm/s".to_string()),
        blank_holding_force: holding_force.to_string(),
        lubricant_type: fc
            .lubricant_type
            .clone()
            .unwrap_or_else(|| "Standard lubricant".to_string()),
        grain_direction_effect: grain_effect.to_string(),
        temperature_range: material.regime.description().to_string(),
        max_forming_depth,
        specific,
        tonnage_efficiency_factor: tonnage_efficiency_factor(material.regime, operation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::catalog;

    fn select(id: &str) -> SelectedMaterial {
        catalog::find(id).unwrap().select(TemperatureRegime::Room)
    }

    #[test]
    fn test_clearance_adjustment_thresholds() {
        assert_eq!(adjust_clearance_for_cutting("6%", 650.0), "7.5%");
        assert_eq!(adjust_clearance_for_cutting("6%", 250.0), "5.5%");
        assert_eq!(adjust_clearance_for_cutting("6%", 400.0), "6.0%");
        // range strings parse their leading value
        assert_eq!(adjust_clearance_for_cutting("6-8%", 400.0), "6.0%");
    }

    #[test]
    fn test_cutting_clearance_nudged_for_stainless() {
        // stainless 304: 620 MPa, base 8%
        let recs = generate(&select("stainless-304"), OperationKind::Perimeter, 2.0);
        assert_eq!(recs.die_clearance, "9.5%");
        assert_eq!(recs.title, "Cutting Recommendations");
    }

    #[test]
    fn test_punching_uses_thickness() {
        let recs = generate(&select("mild-steel"), OperationKind::Hole, 2.0);
        match recs.specific {
            SpecificRecommendations::Punching {
                minimum_diameter,
                recommended_spacing,
                ..
            } => {
                assert_eq!(minimum_diameter, "2mm");
                assert_eq!(recommended_spacing, "4mm");
            }
            other => panic!("unexpected specific block: {other:?}"),
        }
    }

    #[test]
    fn test_thin_sheet_punching_floors() {
        let recs = generate(&select("mild-steel"), OperationKind::Hole, 1.0);
        match recs.specific {
            SpecificRecommendations::Punching {
                minimum_diameter,
                recommended_spacing,
                ..
            } => {
                assert_eq!(minimum_diameter, "1.5mm");
                assert_eq!(recommended_spacing, "3mm");
            }
            other => panic!("unexpected specific block: {other:?}"),
        }
    }

    #[test]
    fn test_bend_recommendations() {
        let recs = generate(&select("titanium-grade2"), OperationKind::Bend, 2.0);
        match recs.specific {
            SpecificRecommendations::Bending {
                minimum_bend_radius,
                grain_direction,
                ..
            } => {
                assert_eq!(minimum_bend_radius, "2.5t");
                assert_eq!(grain_direction, "Align bend axis perpendicular to grain direction");
            }
            other => panic!("unexpected specific block: {other:?}"),
        }
    }

    #[test]
    fn test_draw_ratio_bands() {
        assert_eq!(max_draw_ratio(1.5, 0.4), "2.2 - 2.4 LDR");
        assert_eq!(max_draw_ratio(1.2, 0.2), "2.0 - 2.2 LDR");
        assert_eq!(max_draw_ratio(1.0, 0.1), "1.8 - 2.0 LDR");
        assert_eq!(max_draw_ratio(0.6, 0.1), "1.6 - 1.8 LDR");
    }

    #[test]
    fn test_efficiency_factor() {
        assert_eq!(tonnage_efficiency_factor(TemperatureRegime::Room, OperationKind::Perimeter), 1.0);
        assert_eq!(tonnage_efficiency_factor(TemperatureRegime::Warm, OperationKind::Bend), 1.0);
        assert_eq!(tonnage_efficiency_factor(TemperatureRegime::Hot, OperationKind::Draw), 0.99);
        assert_eq!(tonnage_efficiency_factor(TemperatureRegime::Room, OperationKind::Draw), 1.1);
    }
}
