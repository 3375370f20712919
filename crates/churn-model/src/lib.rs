//! Data model for churn data preparation.
//!
//! - **table**: columnar record table with a declared kind per column
//! - **value**: typed cell values, including the [`CellValue::Missing`] marker
//! - **report**: cleaning report produced alongside the cleaned table
//! - **error**: schema errors raised when a transform references an absent column

pub mod error;
pub mod report;
pub mod table;
pub mod value;

pub use error::{Result, SchemaError};
pub use report::{CleaningReport, StepRecord, ValueCoercionWarning};
pub use table::{Column, Table};
pub use value::{CellValue, ColumnKind, format_number};
