//! Churn table ingestion utilities.
//!
//! This crate loads delimited customer tables into a typed
//! [`churn_model::Table`] and writes cleaned tables back out.
//!
//! # Features
//!
//! - **CSV Loading**: header row plus value rows, configurable delimiter
//! - **Missing Tokens**: conventional NA spellings load as the missing marker
//! - **Kind Inference**: integer, number or text per column
//! - **Staged Output**: output is renamed into place only after a complete write
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use churn_ingest::{IngestOptions, read_table, write_table};
//!
//! let options = IngestOptions::default();
//! let table = read_table(Path::new("WA_Fn-UseC_-Telco-Customer-Churn.csv"), &options)?;
//! write_table(&table, Path::new("copy.csv"), options.delimiter)?;
//! ```

mod csv;
mod error;
mod infer;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading / Writing ===
pub use self::csv::{read_table, read_table_from_reader, render_table, write_table, write_table_to_writer};

// === Options ===
pub use options::{DEFAULT_MISSING_TOKENS, IngestOptions};

// === Parsing Helpers ===
pub use infer::{infer_kind, parse_f64, parse_i64};
