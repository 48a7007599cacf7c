//! Report rendering
//!
//! Plain text for a terminal, or JSON for other tools.

use clap::ValueEnum;
use rule_engine::{Category, EvaluationReport};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Write};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render reports in the requested format
pub fn render(reports: &[EvaluationReport], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}

/// One block per patient followed by a summary line
pub fn render_text(reports: &[EvaluationReport]) -> Result<String, fmt::Error> {
    let mut out = String::new();

    for report in reports {
        writeln!(out, "{}: {}", report.subject_name, report.overall_category)?;
        for (name, annotation) in &report.parameter_annotations {
            let value = annotation.value.to_string();
            writeln!(out, "  {:<40} {:>12}  {}", name, value, annotation.category)?;
        }
        out.push('\n');
    }

    let counts = category_counts(reports);
    let summary: Vec<String> = counts
        .iter()
        .rev()
        .map(|(category, count)| format!("{count} {category}"))
        .collect();
    let noun = if reports.len() == 1 { "patient" } else { "patients" };
    writeln!(out, "{} {}: {}", reports.len(), noun, summary.join(", "))?;

    Ok(out)
}

/// Number of patients per overall category
pub fn category_counts(reports: &[EvaluationReport]) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for report in reports {
        *counts.entry(report.overall_category).or_insert(0) += 1;
    }
    counts
}
