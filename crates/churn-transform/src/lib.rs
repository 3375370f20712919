//! Churn table transformation utilities.
//!
//! This crate turns a raw customer churn table into a model-ready one:
//!
//! - **types**: transform step descriptors and the ordered [`TransformPlan`]
//! - **config**: column layout and token mappings the default plan is built from
//! - **ops**: the column-level operations (numeric coercion, row filtering,
//!   column removal, binary mapping, one-hot expansion)
//! - **executor**: runs a plan and produces a [`churn_model::CleaningReport`]

pub mod config;
pub mod error;
pub mod executor;
pub mod ops;
pub mod types;

// === Pipeline ===
pub use executor::{execute_plan, run, run_default};
pub use types::{TransformPlan, TransformStep};

// === Configuration ===
pub use config::{BinaryMapping, PipelineConfig};
pub use error::ConfigError;

// === Operations ===
pub use ops::{
    coerce_numeric, drop_column, drop_rows_with_missing, map_binary, one_hot_expand,
    parse_numeric,
};
