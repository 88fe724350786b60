//! # tonnage_core - Sheet-Metal Press Tonnage Calculation Engine
//!
//! `tonnage_core` computes the press force required for sheet-metal
//! operations (perimeter cutting, hole punching, bending, forming, deep
//! drawing) together with the secondary estimates a process engineer wants
//! next to the tonnage: springback compensation, surface finish, tool wear
//! and process recommendations. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the hosting layer owns mutable state; the engine takes a
//!   [`coordinator::Snapshot`] and returns a fresh [`coordinator::Results`]
//! - **SI at the core**: all internal math is metric (mm, °C, MPa, metric
//!   tons); imperial appears once, at the display boundary
//! - **Warnings, not panics**: questionable geometry degrades to a zeroed
//!   contribution plus a structured [`errors::Warning`], never a crash
//! - **JSON-First**: every type implements Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use tonnage_core::coordinator::{full_recalculation, Parameters, Snapshot};
//! use tonnage_core::errors::Diagnostics;
//! use tonnage_core::materials::catalog;
//! use tonnage_core::temperature::TemperatureRegime;
//!
//! let mut snapshot = Snapshot {
//!     material: Some(catalog::find("mild-steel")?.select(TemperatureRegime::Room)),
//!     parameters: Parameters { thickness: 2.0, ..Parameters::default() },
//!     operations: Default::default(),
//! };
//! snapshot.operations.perimeter.enabled = true;
//! snapshot.operations.perimeter.length = 500.0;
//!
//! let mut diag = Diagnostics::new();
//! let results = full_recalculation(&snapshot, &mut diag).unwrap();
//! assert!((results.total_tonnage - 400.0).abs() < 1e-9);
//! # Ok::<(), tonnage_core::errors::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`coordinator`] - Snapshot-to-results recalculation (full and selective)
//! - [`calculations`] - Force models per operation family
//! - [`materials`] - Material catalog and per-regime properties
//! - [`operations`] - Geometry items and the operation set
//! - [`springback`] - Elastic recovery prediction and compensation
//! - [`surface_finish`] - Surface roughness prediction and lubrication
//! - [`tool_wear`] - Tool life, maintenance scheduling, upgrade comparisons
//! - [`recommendations`] - Per-operation process recommendations
//! - [`temperature`] - Temperature regimes and strength derating
//! - [`units`] - Type-safe unit wrappers and the display boundary
//! - [`validation`] - Input clamping to plausible ranges
//! - [`errors`] - Structured errors and the warning channel
//! - [`file_io`] - Saved-calculation library with atomic saves

pub mod calculations;
pub mod coordinator;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod operations;
pub mod recommendations;
pub mod springback;
pub mod surface_finish;
pub mod temperature;
pub mod tool_wear;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use coordinator::{full_recalculation, selective_recalculation, InputChange, Results, Snapshot};
pub use errors::{CalcError, CalcResult, Diagnostics, Warning, WarningCode};
pub use file_io::{load_library, save_library, CalculationLibrary, SavedCalculation};
pub use materials::{Material, SelectedMaterial};
pub use units::UnitSystem;
