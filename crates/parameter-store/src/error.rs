//! Store Error Types

use thiserror::Error;

/// Errors while loading patient records
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record file could not be read
    #[error("Failed to read patient records from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Record document is not valid JSON or has the wrong shape
    #[error("Malformed patient records: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two records share the same subject name
    #[error("Duplicate patient record: {0}")]
    DuplicateSubject(String),
}
