//! Error types for table ingestion and output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a delimited table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Malformed delimited text.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to encode a record.
    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row contains a blank name.
    #[error("empty column name at position {index} in {path}")]
    EmptyColumnName { path: PathBuf, index: usize },

    /// Header row repeats a name.
    #[error("duplicate column name '{column}' in {path}")]
    DuplicateColumnName { path: PathBuf, column: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_empty_column_display() {
        let err = IngestError::EmptyColumnName {
            path: PathBuf::from("telco.csv"),
            index: 2,
        };
        assert_eq!(err.to_string(), "empty column name at position 2 in telco.csv");
    }
}
