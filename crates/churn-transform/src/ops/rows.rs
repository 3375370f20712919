use churn_model::{Result, Table};
use tracing::debug;

const STEP: &str = "Drop Rows";

/// Remove every row whose value in `column` is missing.
///
/// Remaining rows keep their relative order. Returns the number of rows removed.
pub fn drop_rows_with_missing(table: &mut Table, column: &str) -> Result<usize> {
    let keep: Vec<bool> = table
        .require(column, STEP)?
        .values
        .iter()
        .map(|value| !value.is_missing())
        .collect();
    let before = table.height();
    table.retain_rows(&keep);
    let dropped = before - table.height();
    debug!(column, dropped, remaining = table.height(), "dropped rows with missing values");
    Ok(dropped)
}
