//! Descriptive summary of a churn table.
//!
//! Computes the figures behind the usual exploratory charts: churn
//! distribution, churn by contract type, and monthly charges and tenure
//! split by churn. Aggregation runs on a polars frame built from the four
//! columns involved.

use churn_model::{CellValue, Table};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

const STEP: &str = "Describe";

/// Label used for a group whose key is missing.
pub const MISSING_LABEL: &str = "(missing)";

// Frame column names, independent of the source table's names.
const CHURN: &str = "churn";
const CONTRACT: &str = "contract";
const MONTHLY_CHARGES: &str = "monthly_charges";
const TENURE: &str = "tenure";
const CUSTOMERS: &str = "customers";

/// Source columns the summary reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeColumns {
    pub churn: String,
    pub contract: String,
    pub monthly_charges: String,
    pub tenure: String,
}

impl Default for DescribeColumns {
    fn default() -> Self {
        Self {
            churn: "Churn".to_string(),
            contract: "Contract".to_string(),
            monthly_charges: "MonthlyCharges".to_string(),
            tenure: "tenure".to_string(),
        }
    }
}

/// Customers per churn label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub customers: usize,
}

/// Customers per (category, churn label) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChurnByCategory {
    pub category: String,
    pub churn: String,
    pub customers: usize,
}

/// Distribution of a numeric column within one churn group.
///
/// Statistics are `None` when the group has no non-missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub churn: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveSummary {
    pub customers: usize,
    pub churn_distribution: Vec<CategoryCount>,
    pub churn_by_contract: Vec<ChurnByCategory>,
    pub monthly_charges_by_churn: Vec<GroupStats>,
    pub tenure_by_churn: Vec<GroupStats>,
}

/// Summarise `table`.
///
/// Groups are sorted by label, with the missing group first. Cells that are
/// not numeric count as missing in the numeric statistics.
pub fn describe(table: &Table, columns: &DescribeColumns) -> Result<DescriptiveSummary> {
    let frame = summary_frame(table, columns)?;

    let summary = DescriptiveSummary {
        customers: table.height(),
        churn_distribution: churn_distribution(&frame)?,
        churn_by_contract: churn_by_contract(&frame)?,
        monthly_charges_by_churn: stats_by_churn(&frame, MONTHLY_CHARGES)?,
        tenure_by_churn: stats_by_churn(&frame, TENURE)?,
    };
    debug!(
        customers = summary.customers,
        churn_groups = summary.churn_distribution.len(),
        contract_groups = summary.churn_by_contract.len(),
        "computed descriptive summary"
    );
    Ok(summary)
}

fn label_values(table: &Table, name: &str) -> Result<Vec<Option<String>>> {
    let column = table.require(name, STEP)?;
    Ok(column
        .values
        .iter()
        .map(|value| (!value.is_missing()).then(|| value.render()))
        .collect())
}

fn numeric_values(table: &Table, name: &str) -> Result<Vec<Option<f64>>> {
    let column = table.require(name, STEP)?;
    Ok(column.values.iter().map(CellValue::as_f64).collect())
}

fn summary_frame(table: &Table, columns: &DescribeColumns) -> Result<DataFrame> {
    let frame = DataFrame::new(vec![
        Column::new(CHURN.into(), label_values(table, &columns.churn)?),
        Column::new(CONTRACT.into(), label_values(table, &columns.contract)?),
        Column::new(
            MONTHLY_CHARGES.into(),
            numeric_values(table, &columns.monthly_charges)?,
        ),
        Column::new(TENURE.into(), numeric_values(table, &columns.tenure)?),
    ])?;
    Ok(frame)
}

fn label(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_LABEL).to_string()
}

fn count(value: Option<i64>) -> usize {
    value.and_then(|v| usize::try_from(v).ok()).unwrap_or(0)
}

fn churn_distribution(frame: &DataFrame) -> Result<Vec<CategoryCount>> {
    let grouped = frame
        .clone()
        .lazy()
        .group_by([col(CHURN)])
        .agg([len().cast(DataType::Int64).alias(CUSTOMERS)])
        .sort([CHURN], SortMultipleOptions::default())
        .collect()?;

    let labels = grouped.column(CHURN)?.str()?;
    let customers = grouped.column(CUSTOMERS)?.i64()?;
    Ok((0..grouped.height())
        .map(|idx| CategoryCount {
            category: label(labels.get(idx)),
            customers: count(customers.get(idx)),
        })
        .collect())
}

fn churn_by_contract(frame: &DataFrame) -> Result<Vec<ChurnByCategory>> {
    let grouped = frame
        .clone()
        .lazy()
        .group_by([col(CONTRACT), col(CHURN)])
        .agg([len().cast(DataType::Int64).alias(CUSTOMERS)])
        .sort([CONTRACT, CHURN], SortMultipleOptions::default())
        .collect()?;

    let contracts = grouped.column(CONTRACT)?.str()?;
    let labels = grouped.column(CHURN)?.str()?;
    let customers = grouped.column(CUSTOMERS)?.i64()?;
    Ok((0..grouped.height())
        .map(|idx| ChurnByCategory {
            category: label(contracts.get(idx)),
            churn: label(labels.get(idx)),
            customers: count(customers.get(idx)),
        })
        .collect())
}

fn stats_by_churn(frame: &DataFrame, value: &str) -> Result<Vec<GroupStats>> {
    let grouped = frame
        .clone()
        .lazy()
        .group_by([col(CHURN)])
        .agg([
            col(value).count().cast(DataType::Int64).alias("count"),
            col(value).mean().alias("mean"),
            col(value).median().alias("median"),
            col(value).min().alias("min"),
            col(value).max().alias("max"),
        ])
        .sort([CHURN], SortMultipleOptions::default())
        .collect()?;

    let labels = grouped.column(CHURN)?.str()?;
    let counts = grouped.column("count")?.i64()?;
    let mean = grouped.column("mean")?.f64()?;
    let median = grouped.column("median")?.f64()?;
    let min = grouped.column("min")?.f64()?;
    let max = grouped.column("max")?.f64()?;
    Ok((0..grouped.height())
        .map(|idx| GroupStats {
            churn: label(labels.get(idx)),
            count: count(counts.get(idx)),
            mean: mean.get(idx),
            median: median.get(idx),
            min: min.get(idx),
            max: max.get(idx),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_clamps_negative() {
        assert_eq!(count(Some(-1)), 0);
        assert_eq!(count(None), 0);
        assert_eq!(count(Some(7)), 7);
    }

    #[test]
    fn test_missing_label() {
        assert_eq!(label(None), MISSING_LABEL);
        assert_eq!(label(Some("Yes")), "Yes");
    }
}
