//! Home Triage - Main Entry Point

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use triage_cli::render::{render, OutputFormat};
use triage_cli::settings::Settings;
use triage_cli::{evaluate_all, init_logging, load_patient_file};

/// Classify self-reported patient records into green/orange/red
#[derive(Debug, Parser)]
#[command(name = "triage", version)]
struct Args {
    /// Settings file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format, overrides the settings file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// JSON array of patient records
    records: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;
    init_logging(&settings.log_level, settings.log_json)?;

    info!("=== Home Triage v{} ===", env!("CARGO_PKG_VERSION"));

    let protocol = Arc::new(covid_protocol::home_follow_up(&settings.thresholds)?);

    let records = load_patient_file(&args.records)
        .await
        .with_context(|| format!("Failed to load {}", args.records.display()))?;

    let mut reports = Vec::with_capacity(records.len());
    let mut failures = 0usize;
    for result in evaluate_all(protocol, records).await? {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("{}", e);
                failures += 1;
            }
        }
    }

    let format = args.format.unwrap_or(settings.format);
    println!("{}", render(&reports, format)?.trim_end());

    if failures > 0 {
        error!("{} records could not be evaluated", failures);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
