use std::path::PathBuf;

use churn_model::SchemaError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while summarising a table or rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("summary computation failed: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
