//! # Saved Calculations
//!
//! Named calculation snapshots persisted as a JSON library file, with
//! atomic writes:
//! 1. Serialize the library to JSON
//! 2. Write to a temporary file (.tmp)
//! 3. Sync to disk (fsync)
//! 4. Rename over the target (atomic on most filesystems)
//!
//! An interrupted save therefore leaves either the old file or the new one,
//! never a truncated mix.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tonnage_core::coordinator::Snapshot;
//! use tonnage_core::file_io::{load_library, save_library, CalculationLibrary, SavedCalculation};
//! use std::path::Path;
//!
//! let mut library = CalculationLibrary::new();
//! library.add(SavedCalculation::new("bracket rev B", Snapshot::default(), None));
//! save_library(&library, Path::new("calculations.json"))?;
//!
//! let library = load_library(Path::new("calculations.json"))?;
//! assert_eq!(library.calculations.len(), 1);
//! # Ok::<(), tonnage_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coordinator::{Results, Snapshot};
use crate::errors::{CalcError, CalcResult};

/// Library file schema version. Major bump for breaking layout changes.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// One named calculation: the inputs that produced it and, when it was
/// saved after a computation, the derived results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCalculation {
    pub id: Uuid,
    pub name: String,
    pub created: DateTime<Utc>,
    pub snapshot: Snapshot,
    /// Results at save time; absent when saved before a computation ran
    pub results: Option<Results>,
}

impl SavedCalculation {
    pub fn new(name: impl Into<String>, snapshot: Snapshot, results: Option<Results>) -> Self {
        SavedCalculation {
            id: Uuid::new_v4(),
            name: name.into(),
            created: Utc::now(),
            snapshot,
            results,
        }
    }
}

/// The persisted collection of saved calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationLibrary {
    pub version: String,
    pub calculations: Vec<SavedCalculation>,
}

impl Default for CalculationLibrary {
    fn default() -> Self {
        CalculationLibrary {
            version: SCHEMA_VERSION.to_string(),
            calculations: Vec::new(),
        }
    }
}

impl CalculationLibrary {
    pub fn new() -> Self {
        CalculationLibrary::default()
    }

    pub fn add(&mut self, calculation: SavedCalculation) {
        self.calculations.push(calculation);
    }

    pub fn find(&self, id: Uuid) -> Option<&SavedCalculation> {
        self.calculations.iter().find(|c| c.id == id)
    }

    /// Remove by id; returns the removed entry when it existed.
    pub fn remove(&mut self, id: Uuid) -> Option<SavedCalculation> {
        let index = self.calculations.iter().position(|c| c.id == id)?;
        Some(self.calculations.remove(index))
    }
}

/// Save a calculation library with atomic write semantics.
pub fn save_library(library: &CalculationLibrary, path: &Path) -> CalcResult<()> {
    let json =
        serde_json::to_string_pretty(library).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // don't leave the temp file behind on failure
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a calculation library.
pub fn load_library(path: &Path) -> CalcResult<CalculationLibrary> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let library: CalculationLibrary =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&library.version)?;

    Ok(library)
}

/// Major version of the file must match the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let file_major = file_version.split('.').next().and_then(|p| p.parse::<u32>().ok());
    let current_major = SCHEMA_VERSION
        .split('.')
        .next()
        .and_then(|p| p.parse::<u32>().ok());

    match (file_major, current_major) {
        (Some(file), Some(current)) if file == current => Ok(()),
        _ => Err(CalcError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::{full_recalculation, Parameters};
    use crate::errors::Diagnostics;
    use crate::materials::catalog;
    use crate::temperature::TemperatureRegime;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_library_path(name: &str) -> PathBuf {
        temp_dir().join(format!("tonnage_test_{}.json", name))
    }

    fn sample_snapshot() -> Snapshot {
        let mut snapshot = Snapshot {
            material: Some(
                catalog::find("mild-steel")
                    .unwrap()
                    .select(TemperatureRegime::Room),
            ),
            parameters: Parameters {
                thickness: 2.0,
                ..Parameters::default()
            },
            operations: Default::default(),
        };
        snapshot.operations.perimeter.enabled = true;
        snapshot.operations.perimeter.length = 500.0;
        snapshot
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_library_path("roundtrip");

        let snapshot = sample_snapshot();
        let mut diag = Diagnostics::new();
        let results = full_recalculation(&snapshot, &mut diag);

        let mut library = CalculationLibrary::new();
        library.add(SavedCalculation::new("bracket", snapshot, results));
        save_library(&library, &path).unwrap();

        let loaded = load_library(&path).unwrap();
        assert_eq!(loaded, library);
        let saved = &loaded.calculations[0];
        assert_eq!(saved.name, "bracket");
        let results = saved.results.as_ref().unwrap();
        assert!((results.total_tonnage - 400.0).abs() < 1e-9);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_library_path("atomic");
        let tmp_path = path.with_extension("json.tmp");

        save_library(&CalculationLibrary::new(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_add_find_remove() {
        let mut library = CalculationLibrary::new();
        let calc = SavedCalculation::new("test", sample_snapshot(), None);
        let id = calc.id;
        library.add(calc);

        assert!(library.find(id).is_some());
        assert_eq!(library.remove(id).unwrap().name, "test");
        assert!(library.find(id).is_none());
        assert!(library.remove(id).is_none());
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("1.2.7").is_ok());
        assert!(validate_version("2.0.0").is_err());
        assert!(validate_version("not-a-version").is_err());
    }

    #[test]
    fn test_load_missing_file_is_file_error() {
        let err = load_library(Path::new("/nonexistent/tonnage.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
