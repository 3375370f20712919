use std::path::PathBuf;

use churn_model::{CleaningReport, ColumnKind};
use churn_report::DescriptiveSummary;

#[derive(Debug)]
pub struct CleanOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report_path: Option<PathBuf>,
    pub report: CleaningReport,
}

/// Load-time view of one raw column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    pub missing: usize,
}

#[derive(Debug)]
pub struct DescribeOutcome {
    pub input: PathBuf,
    pub rows: usize,
    pub columns: Vec<ColumnProfile>,
    pub summary: DescriptiveSummary,
}
