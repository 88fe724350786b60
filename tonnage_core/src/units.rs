//! # Unit Types and Conversion
//!
//! Type-safe wrappers for the unit pairs the calculator supports, plus the
//! dynamic conversion path used at the display boundary.
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The calculator uses a small, fixed set of unit pairs
//! - JSON serialization stays clean (just numbers)
//! - Minimal runtime overhead
//!
//! Each pair is driven by a single authoritative constant and its exact
//! reciprocal, so `to(from(x)) == x` holds to floating-point tolerance.
//!
//! ## SI at the core
//!
//! The engine computes and stores metric values only (mm, °C, metric tons,
//! MPa). Imperial values appear exactly once, at the display boundary, via
//! [`format_quantity`] or the newtype `From` impls. Keeping the conversion in
//! one place is what prevents the double-conversion class of defect for
//! area-based operations.
//!
//! ## Example
//!
//! ```rust
//! use tonnage_core::units::{Inches, Mm};
//!
//! let thickness = Inches(0.078_740_157_480_314_96);
//! let mm: Mm = thickness.into();
//! assert!((mm.0 - 2.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{Diagnostics, WarningCode};

/// Millimeters per inch (exact)
pub const MM_PER_INCH: f64 = 25.4;
/// Pounds-force per newton
pub const LBF_PER_NEWTON: f64 = 0.2248;
/// US (short) tons per metric ton
pub const US_TONS_PER_METRIC_TON: f64 = 1.1023;
/// ksi per MPa
pub const KSI_PER_MPA: f64 = 0.145038;

/// Whether the hosting state stores and presents metric or imperial values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn is_metric(self) -> bool {
        matches!(self, UnitSystem::Metric)
    }
}

// ============================================================================
// Length
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Mm {
    fn from(inches: Inches) -> Self {
        Mm(inches.0 * MM_PER_INCH)
    }
}

impl From<Mm> for Inches {
    fn from(mm: Mm) -> Self {
        Inches(mm.0 / MM_PER_INCH)
    }
}

// ============================================================================
// Temperature
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

// ============================================================================
// Force
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in pounds-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoundsForce(pub f64);

impl From<Newtons> for PoundsForce {
    fn from(n: Newtons) -> Self {
        PoundsForce(n.0 * LBF_PER_NEWTON)
    }
}

impl From<PoundsForce> for Newtons {
    fn from(lbf: PoundsForce) -> Self {
        Newtons(lbf.0 / LBF_PER_NEWTON)
    }
}

// ============================================================================
// Tonnage
// ============================================================================

/// Press force in metric tons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricTons(pub f64);

/// Press force in US (short) tons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsTons(pub f64);

impl From<MetricTons> for UsTons {
    fn from(t: MetricTons) -> Self {
        UsTons(t.0 * US_TONS_PER_METRIC_TON)
    }
}

impl From<UsTons> for MetricTons {
    fn from(t: UsTons) -> Self {
        MetricTons(t.0 / US_TONS_PER_METRIC_TON)
    }
}

// ============================================================================
// Stress / Pressure
// ============================================================================

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

/// Stress in kips per square inch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksi(pub f64);

impl From<Mpa> for Ksi {
    fn from(mpa: Mpa) -> Self {
        Ksi(mpa.0 * KSI_PER_MPA)
    }
}

impl From<Ksi> for Mpa {
    fn from(ksi: Ksi) -> Self {
        Mpa(ksi.0 / KSI_PER_MPA)
    }
}

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_value!(Mm);
impl_value!(Inches);
impl_value!(Celsius);
impl_value!(Fahrenheit);
impl_value!(Newtons);
impl_value!(PoundsForce);
impl_value!(MetricTons);
impl_value!(UsTons);
impl_value!(Mpa);
impl_value!(Ksi);

// ============================================================================
// Dynamic Conversion
// ============================================================================

/// Unit tags for the dynamic conversion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Mm,
    Inch,
    Celsius,
    Fahrenheit,
    Newton,
    PoundForce,
    MetricTon,
    UsTon,
    Mpa,
    Ksi,
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::Inch => "in",
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Newton => "N",
            Unit::PoundForce => "lbf",
            Unit::MetricTon => "metric t",
            Unit::UsTon => "US ton",
            Unit::Mpa => "MPa",
            Unit::Ksi => "ksi",
        }
    }
}

/// Convert a value between two unit tags.
///
/// Supported pairs are exact affine transforms. An unsupported pair is not an
/// error: the value is returned unchanged and an `UnsupportedConversion`
/// warning is recorded.
pub fn convert(value: f64, from: Unit, to: Unit, diag: &mut Diagnostics) -> f64 {
    use Unit::*;

    if from == to {
        return value;
    }

    match (from, to) {
        (Inch, Mm) => value * MM_PER_INCH,
        (Mm, Inch) => value / MM_PER_INCH,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Newton, PoundForce) => value * LBF_PER_NEWTON,
        (PoundForce, Newton) => value / LBF_PER_NEWTON,
        (MetricTon, UsTon) => value * US_TONS_PER_METRIC_TON,
        (UsTon, MetricTon) => value / US_TONS_PER_METRIC_TON,
        (Mpa, Ksi) => value * KSI_PER_MPA,
        (Ksi, Mpa) => value / KSI_PER_MPA,
        _ => {
            diag.warn(
                WarningCode::UnsupportedConversion,
                format!(
                    "conversion from {} to {} not supported",
                    from.symbol(),
                    to.symbol()
                ),
                format!("value={value}"),
            );
            value
        }
    }
}

// ============================================================================
// Display Boundary
// ============================================================================

/// Physical quantity kinds the formatting layer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    Length,
    Temperature,
    Force,
    Pressure,
    Tonnage,
}

/// Format a metric (SI) value for presentation in the active unit system.
///
/// The input is always the engine's metric value; for imperial this performs
/// the one and only metric→imperial conversion.
pub fn format_quantity(metric_value: f64, quantity: Quantity, system: UnitSystem) -> String {
    let (value, symbol) = match (quantity, system) {
        (Quantity::Length, UnitSystem::Metric) => (metric_value, "mm"),
        (Quantity::Length, UnitSystem::Imperial) => (metric_value / MM_PER_INCH, "in"),
        (Quantity::Temperature, UnitSystem::Metric) => (metric_value, "°C"),
        (Quantity::Temperature, UnitSystem::Imperial) => {
            (metric_value * 9.0 / 5.0 + 32.0, "°F")
        }
        (Quantity::Force, UnitSystem::Metric) => (metric_value, "N"),
        (Quantity::Force, UnitSystem::Imperial) => (metric_value * LBF_PER_NEWTON, "lbf"),
        (Quantity::Pressure, UnitSystem::Metric) => (metric_value, "MPa"),
        (Quantity::Pressure, UnitSystem::Imperial) => (metric_value * KSI_PER_MPA, "ksi"),
        (Quantity::Tonnage, UnitSystem::Metric) => (metric_value, "metric t"),
        (Quantity::Tonnage, UnitSystem::Imperial) => {
            (metric_value * US_TONS_PER_METRIC_TON, "US ton")
        }
    };
    format!("{value:.2} {symbol}")
}
