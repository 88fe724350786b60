//! # Surface Finish Model
//!
//! Predicts the resulting surface roughness (Ra) of a formed part from the
//! material's hardness and grain size, multiplied by independent factors for
//! lubrication, forming speed, tool condition and temperature regime. Also
//! derives an effective friction coefficient through an analogous factor
//! chain.
//!
//! All factor values are empirical calibration constants.

use serde::{Deserialize, Serialize};

use crate::materials::{MaterialCategory, SelectedMaterial};
use crate::temperature::TemperatureRegime;

/// Hardness assumed when the material does not specify one, HB.
const DEFAULT_HARDNESS: f64 = 150.0;
/// ASTM grain size assumed when the material does not specify one.
const DEFAULT_GRAIN_SIZE: f64 = 5.0;
/// Base friction coefficient assumed when the material does not specify one.
const DEFAULT_FRICTION: f64 = 0.3;
/// Combined additive effect on Ra never drops below this.
const MIN_ADDITIVE_RA_EFFECT: f64 = 0.7;
/// Combined additive effect on friction never drops below this.
const MIN_ADDITIVE_FRICTION_EFFECT: f64 = 0.55;
/// Effective friction coefficient never drops below this.
const MIN_EFFECTIVE_FRICTION: f64 = 0.04;

// ============================================================================
// Factor Tables
// ============================================================================

/// Lubricant family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LubricantType {
    #[default]
    None,
    LightOil,
    MediumOil,
    HeavyOil,
    Emulsion,
    SolidFilm,
    Synthetic,
    WaterBased,
    SemiSynthetic,
    VegetableBased,
    MineralOil,
    EpOil,
    ChlorinatedOil,
    EpOilWithMos2,
    ChlorinatedOilWithEp,
    TitaniumLubricant,
}

impl LubricantType {
    /// Multiplier on predicted Ra.
    pub fn ra_factor(self) -> f64 {
        match self {
            LubricantType::None => 1.3,
            LubricantType::LightOil => 0.9,
            LubricantType::MediumOil => 0.8,
            LubricantType::HeavyOil => 0.7,
            LubricantType::Emulsion => 0.85,
            LubricantType::SolidFilm => 0.6,
            LubricantType::Synthetic => 0.75,
            LubricantType::WaterBased => 0.88,
            LubricantType::SemiSynthetic => 0.8,
            LubricantType::VegetableBased => 0.82,
            LubricantType::MineralOil => 0.78,
            LubricantType::EpOil => 0.65,
            LubricantType::ChlorinatedOil => 0.62,
            LubricantType::EpOilWithMos2 => 0.55,
            LubricantType::ChlorinatedOilWithEp => 0.52,
            LubricantType::TitaniumLubricant => 0.5,
        }
    }

    /// Multiplier on the base friction coefficient. The specialized
    /// high-friction lubricants have no entry in the friction table and
    /// pass through at 1.0.
    pub fn friction_reduction(self) -> f64 {
        match self {
            LubricantType::None => 1.0,
            LubricantType::LightOil => 0.85,
            LubricantType::MediumOil => 0.75,
            LubricantType::HeavyOil => 0.65,
            LubricantType::Emulsion => 0.80,
            LubricantType::SolidFilm => 0.55,
            LubricantType::Synthetic => 0.70,
            LubricantType::WaterBased => 0.82,
            LubricantType::SemiSynthetic => 0.72,
            LubricantType::VegetableBased => 0.76,
            LubricantType::MineralOil => 0.75,
            LubricantType::EpOil => 0.60,
            LubricantType::ChlorinatedOil => 0.55,
            LubricantType::EpOilWithMos2
            | LubricantType::ChlorinatedOilWithEp
            | LubricantType::TitaniumLubricant => 1.0,
        }
    }
}

/// Lubricant viscosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Viscosity {
    Low,
    #[default]
    Medium,
    High,
}

impl Viscosity {
    pub fn ra_factor(self) -> f64 {
        match self {
            Viscosity::Low => 1.1,
            Viscosity::Medium => 1.0,
            Viscosity::High => 0.9,
        }
    }

    pub fn friction_factor(self) -> f64 {
        match self {
            Viscosity::Low => 1.1,
            Viscosity::Medium => 1.0,
            Viscosity::High => 0.9,
        }
    }
}

/// Lubricant additive package entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Additive {
    /// Extreme pressure
    EP,
    /// Anti-wear
    AW,
    /// Friction modifiers
    FM,
    /// Viscosity index improvers
    VI,
    /// Molybdenum disulfide
    MoS2,
    /// PTFE (Teflon)
    PTFE,
    Graphite,
}

impl Additive {
    pub fn ra_factor(self) -> f64 {
        match self {
            Additive::EP => 0.9,
            Additive::AW => 0.92,
            Additive::FM => 0.88,
            Additive::VI => 0.95,
            Additive::MoS2 => 0.85,
            Additive::PTFE => 0.82,
            Additive::Graphite => 0.87,
        }
    }

    pub fn friction_factor(self) -> f64 {
        match self {
            Additive::EP => 0.85,
            Additive::AW => 0.88,
            Additive::FM => 0.80,
            Additive::VI => 0.95,
            Additive::MoS2 => 0.75,
            Additive::PTFE => 0.65,
            Additive::Graphite => 0.78,
        }
    }
}

/// Press forming speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FormingSpeed {
    Slow,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl FormingSpeed {
    pub fn ra_factor(self) -> f64 {
        match self {
            FormingSpeed::Slow => 0.9,
            FormingSpeed::Medium => 1.0,
            FormingSpeed::High => 1.2,
            FormingSpeed::VeryHigh => 1.4,
        }
    }
}

/// Condition of the forming tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolCondition {
    New,
    #[default]
    Good,
    Worn,
    Damaged,
}

impl ToolCondition {
    pub fn ra_factor(self) -> f64 {
        match self {
            ToolCondition::New => 0.8,
            ToolCondition::Good => 1.0,
            ToolCondition::Worn => 1.5,
            ToolCondition::Damaged => 2.0,
        }
    }
}

fn regime_ra_factor(regime: TemperatureRegime) -> f64 {
    match regime {
        TemperatureRegime::Room => 1.0,
        TemperatureRegime::Warm => 1.2,
        TemperatureRegime::Hot => 1.5,
    }
}

fn regime_friction_factor(regime: TemperatureRegime) -> f64 {
    match regime {
        TemperatureRegime::Room => 1.0,
        TemperatureRegime::Warm => 1.15,
        TemperatureRegime::Hot => 1.3,
    }
}

// ============================================================================
// Inputs & Report
// ============================================================================

/// Lubricant choice: type, viscosity, additive package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Lubricant {
    pub lubricant_type: LubricantType,
    #[serde(default)]
    pub viscosity: Viscosity,
    #[serde(default)]
    pub additives: Vec<Additive>,
}

impl Lubricant {
    pub fn none() -> Self {
        Lubricant::default()
    }

    fn has_additives(&self) -> bool {
        !self.additives.is_empty()
    }
}

/// Press-side conditions affecting finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinishConditions {
    pub forming_speed: FormingSpeed,
    pub tool_condition: ToolCondition,
}

/// The individual multipliers that produced a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishFactors {
    pub base_surface_roughness: f64,
    pub lubricant_factor: f64,
    pub speed_factor: f64,
    pub tool_condition_factor: f64,
    pub temperature_factor: f64,
}

/// Surface finish prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceFinishReport {
    /// Predicted arithmetic-average roughness, µm
    pub predicted_ra: f64,
    /// Predicted root-mean-square roughness, µm
    pub predicted_rq: f64,
    pub quality_assessment: String,
    pub classification: String,
    pub recommendations: Vec<String>,
    pub factors: FinishFactors,
    pub effective_friction_coefficient: f64,
}

// ============================================================================
// Model
// ============================================================================

/// Base roughness from hardness and grain size; strong materials take a
/// slightly better finish.
fn base_surface_roughness(hardness: f64, grain_size: f64, tensile_mpa: f64) -> f64 {
    let mut base = 0.5 + 250.0 / hardness + 0.1 * grain_size;
    if tensile_mpa > 800.0 {
        base *= 0.85;
    }
    base
}

fn lubricant_ra_factor(lubricant: &Lubricant) -> f64 {
    let mut additive_adjustment = 1.0;
    if lubricant.has_additives() {
        for additive in &lubricant.additives {
            additive_adjustment *= additive.ra_factor();
        }
        additive_adjustment = additive_adjustment.max(MIN_ADDITIVE_RA_EFFECT);
    }
    lubricant.lubricant_type.ra_factor() * lubricant.viscosity.ra_factor() * additive_adjustment
}

/// Effective friction coefficient under the given lubrication, floored at
/// a realistic minimum.
pub fn effective_friction_coefficient(
    base_friction: f64,
    lubricant: &Lubricant,
    regime: TemperatureRegime,
) -> f64 {
    let mut additive_effect = 1.0;
    if lubricant.has_additives() {
        for additive in &lubricant.additives {
            additive_effect *= additive.friction_factor();
        }
        additive_effect = additive_effect.max(MIN_ADDITIVE_FRICTION_EFFECT);
    }

    let effective = base_friction
        * lubricant.lubricant_type.friction_reduction()
        * lubricant.viscosity.friction_factor()
        * additive_effect
        * regime_friction_factor(regime);

    effective.max(MIN_EFFECTIVE_FRICTION)
}

/// Quality assessment text from fixed Ra breakpoints.
pub fn assess_quality(ra: f64) -> &'static str {
    if ra < 0.5 {
        "Excellent - Mirror finish"
    } else if ra < 1.0 {
        "Very good - Fine machined surface"
    } else if ra < 2.0 {
        "Good - Standard machined surface"
    } else if ra < 4.0 {
        "Fair - Rough machined surface"
    } else if ra < 8.0 {
        "Poor - Rough formed surface"
    } else {
        "Very poor - Extremely rough surface"
    }
}

/// Standard classification bands for Ra.
pub fn classify(ra: f64) -> &'static str {
    if ra < 0.1 {
        "Super finish"
    } else if ra < 0.5 {
        "Polished"
    } else if ra < 1.6 {
        "Ground"
    } else if ra < 3.2 {
        "Fine machined"
    } else if ra < 6.3 {
        "Medium machined"
    } else if ra < 12.5 {
        "Rough machined"
    } else if ra < 25.0 {
        "Rough formed"
    } else {
        "Extremely rough"
    }
}

fn recommendations(
    predicted_ra: f64,
    material: &SelectedMaterial,
    conditions: FinishConditions,
    lubricant: &Lubricant,
) -> Vec<String> {
    let mut recs = Vec::new();
    let props = material.active_properties();
    let hardness = props.hardness.unwrap_or(DEFAULT_HARDNESS);

    if lubricant.lubricant_type == LubricantType::None {
        recs.push("Apply appropriate lubricant to significantly improve surface finish".to_string());
    } else if matches!(
        lubricant.lubricant_type,
        LubricantType::LightOil | LubricantType::WaterBased
    ) {
        match material.category {
            MaterialCategory::StainlessSteel => recs.push(
                "Use chlorinated oil or EP additives for better surface finish with stainless steel"
                    .to_string(),
            ),
            MaterialCategory::Titanium => recs.push(
                "Switch to specialized lubricant with MoS2 or PTFE additives for titanium materials"
                    .to_string(),
            ),
            MaterialCategory::Aluminum => recs.push(
                "Consider synthetic lubricant with lower friction for aluminum forming".to_string(),
            ),
            _ => recs.push(
                "Use a higher viscosity lubricant or solid film for improved surface finish"
                    .to_string(),
            ),
        }
    }

    if !lubricant.has_additives() {
        if hardness > 180.0 {
            recs.push(
                "Add EP (Extreme Pressure) additives to lubricant for this hard material"
                    .to_string(),
            );
        } else {
            recs.push(
                "Consider lubricant with friction modifiers to improve surface quality".to_string(),
            );
        }
    }

    if matches!(
        conditions.forming_speed,
        FormingSpeed::High | FormingSpeed::VeryHigh
    ) {
        recs.push("Reduce forming speed to improve surface finish".to_string());
    }

    if matches!(
        conditions.tool_condition,
        ToolCondition::Worn | ToolCondition::Damaged
    ) {
        recs.push("Replace or refurbish forming tools to achieve better surface finish".to_string());
    }

    if material.regime == TemperatureRegime::Hot {
        recs.push(
            "Consider reducing forming temperature if possible to improve surface quality"
                .to_string(),
        );
        if lubricant.lubricant_type != LubricantType::SolidFilm
            && !lubricant.additives.contains(&Additive::EP)
        {
            recs.push(
                "Use high-temperature lubricant with EP additives for elevated temperature forming"
                    .to_string(),
            );
        }
    }

    if hardness < 150.0 {
        recs.push(
            "Consider pre-hardening or using harder die materials for this soft material"
                .to_string(),
        );
    }

    if predicted_ra < 1.6 {
        recs.push(
            "Maintain current process parameters and regularly inspect tool condition".to_string(),
        );
    }

    recs
}

/// Predict the surface finish for the selected material under the given
/// press conditions and lubrication.
pub fn calculate(
    material: &SelectedMaterial,
    conditions: FinishConditions,
    lubricant: &Lubricant,
) -> SurfaceFinishReport {
    let props = material.active_properties();
    let hardness = props.hardness.unwrap_or(DEFAULT_HARDNESS);
    let grain_size = props.grain_size.unwrap_or(DEFAULT_GRAIN_SIZE);

    let base = base_surface_roughness(hardness, grain_size, props.tensile_strength);
    let lubricant_factor = lubricant_ra_factor(lubricant);
    let speed_factor = conditions.forming_speed.ra_factor();
    let tool_factor = conditions.tool_condition.ra_factor();
    let temperature_factor = regime_ra_factor(material.regime);

    let predicted_ra = base * lubricant_factor * speed_factor * tool_factor * temperature_factor;

    SurfaceFinishReport {
        predicted_ra,
        // empirical Ra → Rq relation
        predicted_rq: predicted_ra * 1.11,
        quality_assessment: assess_quality(predicted_ra).to_string(),
        classification: classify(predicted_ra).to_string(),
        recommendations: recommendations(predicted_ra, material, conditions, lubricant),
        factors: FinishFactors {
            base_surface_roughness: base,
            lubricant_factor,
            speed_factor,
            tool_condition_factor: tool_factor,
            temperature_factor,
        },
        effective_friction_coefficient: effective_friction_coefficient(
            props.friction_coefficient.unwrap_or(DEFAULT_FRICTION),
            lubricant,
            material.regime,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::catalog;

    fn steel() -> SelectedMaterial {
        catalog::find("mild-steel").unwrap().select(TemperatureRegime::Room)
    }

    #[test]
    fn test_base_roughness() {
        // 0.5 + 250/120 + 0.1×6
        let base = base_surface_roughness(120.0, 6.0, 400.0);
        assert!((base - (0.5 + 250.0 / 120.0 + 0.6)).abs() < 1e-9);
        // high tensile takes the 15% reduction
        let strong = base_surface_roughness(120.0, 6.0, 900.0);
        assert!((strong - base * 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_additive_ra_floor() {
        let lubricant = Lubricant {
            lubricant_type: LubricantType::MediumOil,
            viscosity: Viscosity::Medium,
            additives: vec![Additive::PTFE, Additive::MoS2, Additive::FM, Additive::EP],
        };
        // combined additive product would be ~0.55, floored at 0.7
        let factor = lubricant_ra_factor(&lubricant);
        assert!((factor - 0.8 * 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_effective_friction_floor() {
        let lubricant = Lubricant {
            lubricant_type: LubricantType::SolidFilm,
            viscosity: Viscosity::High,
            additives: vec![Additive::PTFE, Additive::MoS2],
        };
        let friction = effective_friction_coefficient(0.05, &lubricant, TemperatureRegime::Room);
        assert_eq!(friction, MIN_EFFECTIVE_FRICTION);
    }

    #[test]
    fn test_effective_friction_chain() {
        let lubricant = Lubricant {
            lubricant_type: LubricantType::EpOil,
            viscosity: Viscosity::Medium,
            additives: vec![],
        };
        let friction = effective_friction_coefficient(0.4, &lubricant, TemperatureRegime::Warm);
        assert!((friction - 0.4 * 0.60 * 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_classification_bands() {
        assert_eq!(classify(0.05), "Super finish");
        assert_eq!(classify(0.3), "Polished");
        assert_eq!(classify(1.0), "Ground");
        assert_eq!(classify(2.0), "Fine machined");
        assert_eq!(classify(5.0), "Medium machined");
        assert_eq!(classify(10.0), "Rough machined");
        assert_eq!(classify(20.0), "Rough formed");
        assert_eq!(classify(30.0), "Extremely rough");
    }

    #[test]
    fn test_dry_forming_prediction() {
        let report = calculate(&steel(), FinishConditions::default(), &Lubricant::none());
        // base = 0.5 + 250/120 + 0.6 ≈ 3.183; ×1.3 dry ≈ 4.14
        assert!((report.factors.lubricant_factor - 1.3).abs() < 1e-9);
        assert!(report.predicted_ra > 4.0 && report.predicted_ra < 4.3);
        assert!((report.predicted_rq - report.predicted_ra * 1.11).abs() < 1e-9);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("Apply appropriate lubricant")));
    }

    #[test]
    fn test_worn_tools_raise_roughness_and_recommend() {
        let worn = FinishConditions {
            tool_condition: ToolCondition::Worn,
            ..FinishConditions::default()
        };
        let baseline = calculate(&steel(), FinishConditions::default(), &Lubricant::none());
        let degraded = calculate(&steel(), worn, &Lubricant::none());
        assert!(degraded.predicted_ra > baseline.predicted_ra);
        assert!(degraded
            .recommendations
            .iter()
            .any(|r| r.contains("Replace or refurbish")));
    }

    #[test]
    fn test_hot_regime_recommendations() {
        let hot = catalog::find("mild-steel").unwrap().select(TemperatureRegime::Hot);
        let report = calculate(&hot, FinishConditions::default(), &Lubricant::none());
        assert!((report.factors.temperature_factor - 1.5).abs() < 1e-9);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("reducing forming temperature")));
    }

    #[test]
    fn test_titanium_lubricant_recommendation() {
        let titanium = catalog::find("titanium-grade2").unwrap().select(TemperatureRegime::Room);
        let light_oil = Lubricant {
            lubricant_type: LubricantType::LightOil,
            ..Lubricant::default()
        };
        let report = calculate(&titanium, FinishConditions::default(), &light_oil);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("MoS2 or PTFE")));
    }
}
