//! Transform descriptors and the ordered plan the executor interprets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{BinaryMapping, PipelineConfig};

/// One column-level transformation.
///
/// Every column a step names must exist when the step runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformStep {
    /// Reinterpret values as numbers; unparseable values become missing.
    NumericCoerce { column: String },

    /// Remove every row whose value in `column` is missing.
    DropRows { column: String },

    /// Remove a column entirely.
    DropColumn { column: String },

    /// Exact-token substitution; unmapped tokens become missing.
    MapBinary {
        column: String,
        mapping: BinaryMapping,
    },

    /// Replace each column with one flag column per observed category.
    OneHotExpand { columns: Vec<String> },
}

impl TransformStep {
    pub fn numeric_coerce(column: impl Into<String>) -> Self {
        Self::NumericCoerce {
            column: column.into(),
        }
    }

    pub fn drop_rows(column: impl Into<String>) -> Self {
        Self::DropRows {
            column: column.into(),
        }
    }

    pub fn drop_column(column: impl Into<String>) -> Self {
        Self::DropColumn {
            column: column.into(),
        }
    }

    pub fn map_binary(column: impl Into<String>, mapping: BinaryMapping) -> Self {
        Self::MapBinary {
            column: column.into(),
            mapping,
        }
    }

    pub fn one_hot<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self::OneHotExpand {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a human-readable display name for the step kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::NumericCoerce { .. } => "Numeric Coerce",
            Self::DropRows { .. } => "Drop Rows",
            Self::DropColumn { .. } => "Drop Column",
            Self::MapBinary { .. } => "Binary Map",
            Self::OneHotExpand { .. } => "One-Hot Expand",
        }
    }

    /// Columns the step reads.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            Self::NumericCoerce { column }
            | Self::DropRows { column }
            | Self::DropColumn { column }
            | Self::MapBinary { column, .. } => vec![column.as_str()],
            Self::OneHotExpand { columns } => columns.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for TransformStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.display_name(), self.columns().join(", "))
    }
}

/// Ordered list of transform steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformPlan {
    steps: Vec<TransformStep>,
}

impl TransformPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the churn cleaning plan.
    ///
    /// The identifier is dropped before any encoding, and the multi-value
    /// column is mapped after one-hot expansion since it is not expanded.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut plan = Self::new();
        plan.push(TransformStep::numeric_coerce(&config.charges_column));
        plan.push(TransformStep::drop_rows(&config.charges_column));
        plan.push(TransformStep::drop_column(&config.identifier_column));
        plan.push(TransformStep::map_binary(
            &config.target_column,
            config.target_mapping.clone(),
        ));
        for column in &config.yes_no_columns {
            plan.push(TransformStep::map_binary(
                column,
                config.yes_no_mapping.clone(),
            ));
        }
        plan.push(TransformStep::map_binary(
            &config.gender_column,
            config.gender_mapping.clone(),
        ));
        if !config.one_hot_columns.is_empty() {
            plan.push(TransformStep::one_hot(&config.one_hot_columns));
        }
        plan.push(TransformStep::map_binary(
            &config.multi_value_column,
            config.multi_value_mapping.clone(),
        ));
        plan
    }

    pub fn push(&mut self, step: TransformStep) {
        self.steps.push(step);
    }

    #[must_use]
    pub fn with_step(mut self, step: TransformStep) -> Self {
        self.push(step);
        self
    }

    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<TransformStep> for TransformPlan {
    fn from_iter<I: IntoIterator<Item = TransformStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
