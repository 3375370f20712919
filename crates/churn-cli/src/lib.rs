//! CLI library components for churn-prep.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
