//! # Materials
//!
//! Material definitions for sheet-metal forming. Every material carries a
//! temperature-indexed table of property bundles (`room`/`warm`/`hot`) plus
//! optional forming characteristics used by the process-recommendation rules.
//!
//! Materials are read-only reference data. Selecting one produces a
//! [`SelectedMaterial`] snapshot that *copies* the active regime's strength
//! values into convenience fields — calculations consume the copy, never the
//! catalog entry, so a regime change can never mutate shared data.
//!
//! ## Example
//!
//! ```rust
//! use tonnage_core::materials::catalog;
//! use tonnage_core::temperature::TemperatureRegime;
//!
//! let steel = catalog::find("mild-steel").unwrap();
//! let selected = steel.select(TemperatureRegime::Room);
//! assert_eq!(selected.tensile_strength, 400.0);
//!
//! let warm = selected.with_regime(TemperatureRegime::Warm);
//! assert!(warm.tensile_strength < selected.tensile_strength);
//! ```

pub mod catalog;

use serde::{Deserialize, Serialize};

use crate::temperature::TemperatureRegime;

/// Broad material family, used by recommendation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialCategory {
    Steel,
    StainlessSteel,
    Aluminum,
    Copper,
    Brass,
    Titanium,
}

impl MaterialCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            MaterialCategory::Steel => "Steel",
            MaterialCategory::StainlessSteel => "Stainless Steel",
            MaterialCategory::Aluminum => "Aluminum",
            MaterialCategory::Copper => "Copper",
            MaterialCategory::Brass => "Brass",
            MaterialCategory::Titanium => "Titanium",
        }
    }
}

/// One temperature regime's property bundle.
///
/// Strength values are always present; the remaining fields are optional and
/// each consumer applies its own documented default when a value is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProperties {
    /// Ultimate tensile strength (MPa)
    pub tensile_strength: f64,
    /// Yield strength (MPa)
    pub yield_strength: f64,
    /// Shear strength (MPa)
    pub shear_strength: f64,
    /// Elongation at break (%)
    #[serde(default)]
    pub elongation: Option<f64>,
    /// Brinell hardness (HB)
    #[serde(default)]
    pub hardness: Option<f64>,
    /// Elastic modulus (GPa)
    #[serde(default)]
    pub modulus: Option<f64>,
    /// Strain-hardening exponent n
    #[serde(default)]
    pub strain_hardening_exponent: Option<f64>,
    /// Normal anisotropy ratio r
    #[serde(default)]
    pub anisotropy_ratio: Option<f64>,
    /// Friction coefficient against tool steel
    #[serde(default)]
    pub friction_coefficient: Option<f64>,
    /// As-supplied surface roughness Ra (µm)
    #[serde(default)]
    pub surface_roughness: Option<f64>,
    /// ASTM grain size number
    #[serde(default)]
    pub grain_size: Option<f64>,
    /// Fraction of forward tonnage needed on the reverse stroke
    #[serde(default)]
    pub reverse_factor: Option<f64>,
    /// Minimum bend radius advisory, e.g. "1.5t"
    #[serde(default)]
    pub minimum_bend_radius: Option<String>,
}

/// Property bundles for the three temperature regimes.
///
/// `warm`/`hot` may be absent for a material; lookups fall back to `room`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTable {
    pub room: MaterialProperties,
    #[serde(default)]
    pub warm: Option<MaterialProperties>,
    #[serde(default)]
    pub hot: Option<MaterialProperties>,
}

impl PropertyTable {
    /// Properties for the requested regime, falling back to `room` when the
    /// regime has no bundle of its own.
    pub fn for_regime(&self, regime: TemperatureRegime) -> &MaterialProperties {
        match regime {
            TemperatureRegime::Room => &self.room,
            TemperatureRegime::Warm => self.warm.as_ref().unwrap_or(&self.room),
            TemperatureRegime::Hot => self.hot.as_ref().unwrap_or(&self.room),
        }
    }
}

/// Advisory forming characteristics from the material datasheet.
///
/// All fields are free-text advisories; the recommendation rules substitute
/// fixed defaults for anything absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormingCharacteristics {
    #[serde(default)]
    pub recommended_die_clearance: Option<String>,
    #[serde(default)]
    pub recommended_punch_speed: Option<String>,
    #[serde(default)]
    pub blank_holding_force: Option<String>,
    #[serde(default)]
    pub lubricant_type: Option<String>,
    #[serde(default)]
    pub grain_direction_effect: Option<String>,
    #[serde(default)]
    pub minimum_bend_radius: Option<String>,
    #[serde(default)]
    pub max_forming_depth: Option<String>,
    #[serde(default)]
    pub springback: Option<String>,
}

/// A catalog material: read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    pub category: MaterialCategory,
    /// Linear temperature-derating coefficient (per °C above 20)
    pub temperature_coefficient: f64,
    pub properties: PropertyTable,
    #[serde(default)]
    pub forming_characteristics: FormingCharacteristics,
}

impl Material {
    /// Produce a selection snapshot for the given regime.
    pub fn select(&self, regime: TemperatureRegime) -> SelectedMaterial {
        SelectedMaterial::new(self, regime)
    }
}

/// The material state calculations actually consume.
///
/// Holds its own copy of the property table plus convenience strength fields
/// copied from the active regime. Re-selecting a regime re-copies the
/// convenience fields; nothing aliases the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedMaterial {
    pub id: String,
    pub name: String,
    pub category: MaterialCategory,
    pub temperature_coefficient: f64,
    pub regime: TemperatureRegime,

    /// Tensile strength of the active regime (MPa)
    pub tensile_strength: f64,
    /// Yield strength of the active regime (MPa)
    pub yield_strength: f64,
    /// Shear strength of the active regime (MPa)
    pub shear_strength: f64,
    /// Reverse-stroke fraction of the active regime (defaulted to 0.7)
    pub reverse_factor: f64,

    pub properties: PropertyTable,
    pub forming_characteristics: FormingCharacteristics,
}

/// Reverse-stroke fraction used when the material does not specify one
pub const DEFAULT_REVERSE_FACTOR: f64 = 0.7;

impl SelectedMaterial {
    fn new(material: &Material, regime: TemperatureRegime) -> Self {
        let active = material.properties.for_regime(regime);
        SelectedMaterial {
            id: material.id.clone(),
            name: material.name.clone(),
            category: material.category,
            temperature_coefficient: material.temperature_coefficient,
            regime,
            tensile_strength: active.tensile_strength,
            yield_strength: active.yield_strength,
            shear_strength: active.shear_strength,
            reverse_factor: active.reverse_factor.unwrap_or(DEFAULT_REVERSE_FACTOR),
            properties: material.properties.clone(),
            forming_characteristics: material.forming_characteristics.clone(),
        }
    }

    /// New snapshot with the convenience fields re-copied for `regime`.
    pub fn with_regime(&self, regime: TemperatureRegime) -> Self {
        let active = self.properties.for_regime(regime);
        SelectedMaterial {
            regime,
            tensile_strength: active.tensile_strength,
            yield_strength: active.yield_strength,
            shear_strength: active.shear_strength,
            reverse_factor: active.reverse_factor.unwrap_or(DEFAULT_REVERSE_FACTOR),
            ..self.clone()
        }
    }

    /// The active regime's full property bundle.
    pub fn active_properties(&self) -> &MaterialProperties {
        self.properties.for_regime(self.regime)
    }

    /// Yield-to-tensile ratio, defaulting to 0.7 when tensile is zero.
    pub fn yield_to_tensile_ratio(&self) -> f64 {
        if self.tensile_strength > 0.0 {
            self.yield_strength / self.tensile_strength
        } else {
            0.7
        }
    }
}
