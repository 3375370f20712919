//! Column layout and token mappings the cleaning plan is built from.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Exact token to integer code.
pub type BinaryMapping = BTreeMap<String, i64>;

fn mapping(pairs: &[(&str, i64)]) -> BinaryMapping {
    pairs
        .iter()
        .map(|(token, code)| ((*token).to_string(), *code))
        .collect()
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Names every column the cleaning plan touches.
///
/// The default is the Telco customer churn layout. Fields omitted from a
/// config file keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Total-charges column, coerced to numbers; rows it cannot parse are dropped.
    pub charges_column: String,
    /// Unique customer identifier, dropped before any encoding.
    pub identifier_column: String,
    /// Label column.
    pub target_column: String,
    pub target_mapping: BinaryMapping,
    /// Plain Yes/No service columns.
    pub yes_no_columns: Vec<String>,
    pub yes_no_mapping: BinaryMapping,
    pub gender_column: String,
    pub gender_mapping: BinaryMapping,
    /// Multi-category columns expanded into one flag column per observed value.
    pub one_hot_columns: Vec<String>,
    /// Column with a third negative token, mapped after expansion.
    pub multi_value_column: String,
    pub multi_value_mapping: BinaryMapping,
    /// Contract type, grouped against churn by `describe`.
    pub contract_column: String,
    /// Monthly charges, summarised per churn label by `describe`.
    pub monthly_charges_column: String,
    /// Tenure in months, summarised per churn label by `describe`.
    pub tenure_column: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            charges_column: "TotalCharges".to_string(),
            identifier_column: "customerID".to_string(),
            target_column: "Churn".to_string(),
            target_mapping: mapping(&[("Yes", 1), ("No", 0)]),
            yes_no_columns: names(&[
                "Partner",
                "Dependents",
                "PhoneService",
                "PaperlessBilling",
                "OnlineSecurity",
                "OnlineBackup",
                "DeviceProtection",
                "TechSupport",
                "StreamingTV",
                "StreamingMovies",
            ]),
            yes_no_mapping: mapping(&[("Yes", 1), ("No", 0)]),
            gender_column: "gender".to_string(),
            gender_mapping: mapping(&[("Female", 1), ("Male", 0)]),
            one_hot_columns: names(&["InternetService", "Contract", "PaymentMethod"]),
            multi_value_column: "MultipleLines".to_string(),
            multi_value_mapping: mapping(&[("No phone service", 0), ("No", 0), ("Yes", 1)]),
            contract_column: "Contract".to_string(),
            monthly_charges_column: "MonthlyCharges".to_string(),
            tenure_column: "tenure".to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Load a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: PathBuf::from(path),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| ConfigError::Parse {
            path: PathBuf::from(path),
            source,
        })
    }
}
