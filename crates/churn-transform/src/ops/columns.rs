use churn_model::{Column, Result, SchemaError, Table};
use tracing::debug;

const STEP: &str = "Drop Column";

/// Remove a column entirely.
///
/// Returns the removed column.
pub fn drop_column(table: &mut Table, column: &str) -> Result<Column> {
    let removed = table
        .remove_column(column)
        .ok_or_else(|| SchemaError::missing(column, STEP))?;
    debug!(column, remaining = table.width(), "dropped column");
    Ok(removed)
}
