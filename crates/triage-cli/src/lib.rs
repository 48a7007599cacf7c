//! Home Triage CLI
//!
//! Loads patient records, evaluates them against the home follow-up
//! protocol and renders the reports.

pub mod render;
pub mod settings;

use parameter_store::{read_records, PatientRecord};
use rule_engine::{EngineError, EvaluationReport, Protocol};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Read a records file on the blocking pool
pub async fn load_patient_file(path: impl Into<PathBuf>) -> anyhow::Result<Vec<PatientRecord>> {
    let path = path.into();
    let records = tokio::task::spawn_blocking(move || read_records(path)).await??;
    Ok(records)
}

/// Evaluate every record on the blocking pool, preserving input order.
///
/// The protocol is shared read-only; each evaluation owns its record.
pub async fn evaluate_all(
    protocol: Arc<Protocol>,
    records: Vec<PatientRecord>,
) -> anyhow::Result<Vec<Result<EvaluationReport, EngineError>>> {
    let handles: Vec<_> = records
        .into_iter()
        .map(|record| {
            let protocol = Arc::clone(&protocol);
            tokio::task::spawn_blocking(move || protocol.evaluate_record(&record))
        })
        .collect();

    debug!("Evaluating {} records", handles.len());

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await?);
    }
    Ok(results)
}

/// Initialize logging on stderr.
///
/// `RUST_LOG` overrides `level` when set.
pub fn init_logging(level: &str, json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {e}"))
}
