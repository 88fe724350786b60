//! # Error Types and Diagnostics
//!
//! Structured error types for `tonnage_core`, plus the warning channel the
//! calculation engine reports through.
//!
//! Hard errors (`CalcError`) are reserved for genuinely fatal conditions:
//! unknown material ids, file I/O, serialization. The engine itself never
//! fails hard — invalid geometry, implausible draw ratios and unsupported
//! unit pairs all degrade to a zeroed or unconverted value accompanied by a
//! [`Warning`] pushed into a [`Diagnostics`] sink, so callers (and tests) can
//! inspect exactly what was flagged.
//!
//! ## Example
//!
//! ```rust
//! use tonnage_core::errors::{Diagnostics, WarningCode};
//!
//! let mut diag = Diagnostics::new();
//! diag.warn(WarningCode::InvalidGeometry, "form diameter must be positive", "diameter=-3");
//! assert!(diag.has(WarningCode::InvalidGeometry));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tonnage_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for fatal library operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material not found in the catalog
    #[error("Material not found: {material_id}")]
    MaterialNotFound { material_id: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Saved-calculation file schema is incompatible
    #[error("Version mismatch: file is {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_id: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_id: material_id.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

// ============================================================================
// Warning Channel
// ============================================================================

/// Category codes for non-fatal calculation warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningCode {
    /// Non-positive or non-finite dimension; the offending item contributed zero
    InvalidGeometry,
    /// Physically questionable but still computed (LDR exceeded, deep form, etc.)
    ImplausibleGeometry,
    /// A unit conversion pair the engine does not support; value passed through
    UnsupportedConversion,
    /// An input was clamped to its validated range before calculation
    ClampedInput,
}

/// A single non-fatal warning emitted during calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub code: WarningCode,
    pub message: String,
    /// Machine-readable context, e.g. `"depth=12 thickness=2"`
    pub context: String,
}

/// Ordered collection of warnings for one calculation pass.
///
/// Passed down into the force models by mutable reference; the coordinator
/// returns it alongside the results so the hosting layer can surface warnings
/// deterministically instead of scraping a console.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Record a warning.
    pub fn warn(
        &mut self,
        code: WarningCode,
        message: impl Into<String>,
        context: impl Into<String>,
    ) {
        self.warnings.push(Warning {
            code,
            message: message.into(),
            context: context.into(),
        });
    }

    /// All warnings recorded so far, in emission order.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// True if any warning with the given code was recorded.
    pub fn has(&self, code: WarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Count of warnings with the given code.
    pub fn count(&self, code: WarningCode) -> usize {
        self.warnings.iter().filter(|w| w.code == code).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("thickness", "-2.0", "Thickness must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::material_not_found("unobtanium").error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(
            CalcError::file_error("save", "/tmp/x.json", "denied").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_diagnostics_collects_in_order() {
        let mut diag = Diagnostics::new();
        diag.warn(WarningCode::InvalidGeometry, "bad hole", "diameter=0");
        diag.warn(WarningCode::ImplausibleGeometry, "deep draw", "ratio=2.5");

        assert_eq!(diag.warnings().len(), 2);
        assert_eq!(diag.warnings()[0].code, WarningCode::InvalidGeometry);
        assert!(diag.has(WarningCode::ImplausibleGeometry));
        assert!(!diag.has(WarningCode::UnsupportedConversion));
        assert_eq!(diag.count(WarningCode::InvalidGeometry), 1);
    }
}
