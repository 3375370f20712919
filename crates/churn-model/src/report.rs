//! Cleaning report produced next to the cleaned table.
//!
//! The report is a side artifact: it records what each step changed but is
//! never part of the table handed downstream.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maximum number of distinct example tokens kept per warning.
pub const MAX_WARNING_EXAMPLES: usize = 5;

/// Non-fatal notice that cells could not be coerced or mapped.
///
/// The affected cells were replaced with the missing marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCoercionWarning {
    pub step: String,
    pub column: String,
    pub count: usize,
    /// Distinct offending tokens, first-seen order.
    pub examples: Vec<String>,
}

impl ValueCoercionWarning {
    pub fn new(step: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            column: column.into(),
            count: 0,
            examples: Vec::new(),
        }
    }

    /// Record one offending cell.
    pub fn record(&mut self, token: &str) {
        self.count += 1;
        if self.examples.len() < MAX_WARNING_EXAMPLES && !self.examples.iter().any(|e| e == token)
        {
            self.examples.push(token.to_string());
        }
    }
}

/// What a single executed step did to the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: String,
    pub columns: Vec<String>,
    pub rows_before: usize,
    pub rows_after: usize,
    pub newly_missing: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub input_rows: usize,
    pub input_columns: usize,
    pub output_rows: usize,
    pub output_columns: usize,
    pub rows_dropped: usize,
    /// Values newly replaced by the missing marker, per column.
    pub coerced_to_missing: BTreeMap<String, usize>,
    /// Generated columns, in creation order.
    pub columns_added: Vec<String>,
    /// Removed columns, in removal order.
    pub columns_removed: Vec<String>,
    pub steps: Vec<StepRecord>,
    pub warnings: Vec<ValueCoercionWarning>,
}

impl CleaningReport {
    pub fn new(input_rows: usize, input_columns: usize) -> Self {
        Self {
            input_rows,
            input_columns,
            output_rows: input_rows,
            output_columns: input_columns,
            ..Self::default()
        }
    }

    /// Total values replaced by the missing marker across all columns.
    pub fn total_coerced(&self) -> usize {
        self.coerced_to_missing.values().sum()
    }

    pub fn add_coerced(&mut self, column: &str, count: usize) {
        if count == 0 {
            return;
        }
        *self.coerced_to_missing.entry(column.to_string()).or_default() += count;
    }

    pub fn add_warning(&mut self, warning: ValueCoercionWarning) {
        if warning.count > 0 {
            self.warnings.push(warning);
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
