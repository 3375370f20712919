//! Churn report generation library.
//!
//! - **describe**: descriptive summary of a churn table (churn distribution,
//!   churn by contract, monthly charges and tenure by churn)
//! - **render**: plain-text and JSON rendering of a [`churn_model::CleaningReport`]

mod describe;
mod error;
mod render;

// === Error Types ===
pub use error::{ReportError, Result};

// === Descriptive Summary ===
pub use describe::{
    CategoryCount, ChurnByCategory, DescribeColumns, DescriptiveSummary, GroupStats,
    MISSING_LABEL, describe,
};

// === Cleaning Report ===
pub use render::{
    ReportFormat, cleaning_report_json, cleaning_report_text, render_cleaning_report,
    write_cleaning_report, write_report_text,
};
