//! Cleaning report rendering.

use std::fs;
use std::path::Path;

use churn_model::CleaningReport;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ReportError, Result};

/// Output format for a written report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// Pick a format from the file extension; anything but `.json` is text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Plain-text rendering of a cleaning report.
pub fn cleaning_report_text(report: &CleaningReport) -> String {
    let mut lines = vec![
        "Cleaning report".to_string(),
        "===============".to_string(),
        format!(
            "Input:   {}, {}",
            plural(report.input_rows, "row"),
            plural(report.input_columns, "column")
        ),
        format!(
            "Output:  {}, {}",
            plural(report.output_rows, "row"),
            plural(report.output_columns, "column")
        ),
        format!("Rows dropped: {}", report.rows_dropped),
        format!("Values coerced to missing: {}", report.total_coerced()),
    ];
    for (column, count) in &report.coerced_to_missing {
        lines.push(format!("  {column}: {count}"));
    }
    lines.push(format!(
        "Columns removed: {}",
        list_or_none(&report.columns_removed)
    ));
    lines.push(format!(
        "Columns added: {}",
        list_or_none(&report.columns_added)
    ));

    lines.push(String::new());
    lines.push("Steps".to_string());
    if report.steps.is_empty() {
        lines.push("  none".to_string());
    }
    for (idx, step) in report.steps.iter().enumerate() {
        let mut line = format!(
            "  {:>2}. {}({}): {} -> {}",
            idx + 1,
            step.step,
            step.columns.join(", "),
            step.rows_before,
            plural(step.rows_after, "row")
        );
        if step.newly_missing > 0 {
            line.push_str(&format!(", {} newly missing", step.newly_missing));
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push("Warnings".to_string());
    if report.warnings.is_empty() {
        lines.push("  none".to_string());
    }
    for warning in &report.warnings {
        let examples: Vec<String> = warning
            .examples
            .iter()
            .map(|example| format!("{example:?}"))
            .collect();
        lines.push(format!(
            "  {}({}): {} replaced with missing; examples: {}",
            warning.step,
            warning.column,
            plural(warning.count, "value"),
            examples.join(", ")
        ));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Pretty-printed JSON rendering of a cleaning report.
pub fn cleaning_report_json(report: &CleaningReport) -> Result<String> {
    let mut text = serde_json::to_string_pretty(report)?;
    text.push('\n');
    Ok(text)
}

pub fn render_cleaning_report(report: &CleaningReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(cleaning_report_text(report)),
        ReportFormat::Json => cleaning_report_json(report),
    }
}

/// Write a rendered report to `path`, creating parent directories.
pub fn write_cleaning_report(
    report: &CleaningReport,
    path: &Path,
    format: ReportFormat,
) -> Result<()> {
    let text = render_cleaning_report(report, format)?;
    write_report_text(&text, path)?;
    info!(path = %path.display(), ?format, "cleaning report written");
    Ok(())
}

/// Write already rendered report text to `path`, creating parent directories.
pub fn write_report_text(text: &str, path: &Path) -> Result<()> {
    let write_error = |source: std::io::Error| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, text).map_err(write_error)
}
