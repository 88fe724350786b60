//! # Temperature Effects
//!
//! Temperature regime selection and the dimensionless strength-adjustment
//! factor applied to every force model.
//!
//! Forming at elevated temperature lowers the force a material resists with.
//! The adjustment is linear in the difference from a 20°C reference, scaled by
//! a per-material coefficient, and floored at 0.8 — an empirical floor, not a
//! derived bound.

use serde::{Deserialize, Serialize};

use crate::materials::MaterialProperties;
use crate::units::{Celsius, Fahrenheit, UnitSystem};

/// Reference (room) temperature for the adjustment factor, in °C
pub const REFERENCE_TEMPERATURE_C: f64 = 20.0;

/// Coefficient used when a material does not specify one
pub const DEFAULT_TEMPERATURE_COEFFICIENT: f64 = 0.0002;

/// Lower bound of the temperature adjustment factor
pub const MIN_TEMPERATURE_FACTOR: f64 = 0.8;

/// Temperature regime, selecting which material property bundle applies.
///
/// Boundaries are inclusive on the lower side: exactly 100°C is still `Room`,
/// exactly 300°C is still `Warm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureRegime {
    #[default]
    Room,
    Warm,
    Hot,
}

impl TemperatureRegime {
    pub const ALL: [TemperatureRegime; 3] = [
        TemperatureRegime::Room,
        TemperatureRegime::Warm,
        TemperatureRegime::Hot,
    ];

    /// Regime for a temperature in Celsius.
    pub fn of_celsius(temperature: Celsius) -> Self {
        if temperature.0 <= 100.0 {
            TemperatureRegime::Room
        } else if temperature.0 <= 300.0 {
            TemperatureRegime::Warm
        } else {
            TemperatureRegime::Hot
        }
    }

    /// Regime for a temperature in the given unit system.
    pub fn of_temperature(temperature: f64, system: UnitSystem) -> Self {
        let celsius = match system {
            UnitSystem::Metric => Celsius(temperature),
            UnitSystem::Imperial => Fahrenheit(temperature).into(),
        };
        Self::of_celsius(celsius)
    }

    /// Human-readable description with the regime's temperature span.
    pub fn description(self) -> &'static str {
        match self {
            TemperatureRegime::Room => "Room Temperature (≤100°C)",
            TemperatureRegime::Warm => "Warm Temperature (100-300°C)",
            TemperatureRegime::Hot => "Hot Temperature (>300°C)",
        }
    }
}

impl std::fmt::Display for TemperatureRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Temperature adjustment factor for tonnage calculations.
///
/// `1 − coefficient × (T_C − 20)`, floored at [`MIN_TEMPERATURE_FACTOR`].
/// Temperatures below the reference yield factors slightly above 1.
pub fn temperature_factor(temperature: f64, system: UnitSystem, coefficient: f64) -> f64 {
    let celsius = match system {
        UnitSystem::Metric => temperature,
        UnitSystem::Imperial => Celsius::from(Fahrenheit(temperature)).0,
    };

    let factor = 1.0 - coefficient * (celsius - REFERENCE_TEMPERATURE_C);
    factor.max(MIN_TEMPERATURE_FACTOR)
}

/// Scale a property bundle by a temperature factor.
///
/// Strength properties and hardness drop with temperature; elongation rises
/// (divided by the factor).
pub fn scale_properties(properties: &MaterialProperties, factor: f64) -> MaterialProperties {
    let mut scaled = properties.clone();
    scaled.tensile_strength *= factor;
    scaled.yield_strength *= factor;
    scaled.shear_strength *= factor;
    if let Some(elongation) = scaled.elongation.as_mut() {
        *elongation /= factor;
    }
    if let Some(hardness) = scaled.hardness.as_mut() {
        *hardness *= factor;
    }
    scaled
}
