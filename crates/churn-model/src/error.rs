use thiserror::Error;

/// A transform referenced the table schema in a way it cannot satisfy.
///
/// Always fatal: the pipeline aborts and no output is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("column '{column}' not found (required by {step})")]
    MissingColumn { column: String, step: String },
    #[error("column '{column}' already exists (created by {step})")]
    DuplicateColumn { column: String, step: String },
    #[error("column '{column}' has {actual} values, table has {expected} rows")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

impl SchemaError {
    pub fn missing(column: impl Into<String>, step: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            step: step.into(),
        }
    }

    pub fn duplicate(column: impl Into<String>, step: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            column: column.into(),
            step: step.into(),
        }
    }

    /// Name of the column the error is about.
    pub fn column(&self) -> &str {
        match self {
            Self::MissingColumn { column, .. }
            | Self::DuplicateColumn { column, .. }
            | Self::LengthMismatch { column, .. } => column,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
