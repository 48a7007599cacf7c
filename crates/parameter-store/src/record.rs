//! Patient Records
//!
//! A record pairs a subject name with its parameters. Records arrive as a
//! JSON array:
//!
//! ```json
//! [{ "name": "Patient 1", "parameters": { "age": 65, "body_temperature": null } }]
//! ```

use crate::error::StoreError;
use crate::store::ParameterStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// One patient's self-reported parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Opaque subject identifier
    pub name: String,
    /// Reported parameters
    pub parameters: ParameterStore,
}

impl PatientRecord {
    /// Create a record
    pub fn new(name: impl Into<String>, parameters: ParameterStore) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}

/// Parse a JSON array of patient records
pub fn load_records(json: &str) -> Result<Vec<PatientRecord>, StoreError> {
    let records: Vec<PatientRecord> = serde_json::from_str(json)?;

    ensure_unique(&records)?;
    Ok(records)
}

fn ensure_unique(records: &[PatientRecord]) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.name.as_str()) {
            return Err(StoreError::DuplicateSubject(record.name.clone()));
        }
        debug!(
            "Loaded record '{}' with {} parameters",
            record.name,
            record.parameters.len()
        );
    }
    Ok(())
}

/// Read and parse a JSON file of patient records
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<PatientRecord>, StoreError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let records = load_records(&json)?;
    info!("Read {} patient records from {}", records.len(), path.display());
    Ok(records)
}
