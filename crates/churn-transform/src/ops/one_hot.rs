//! Categorical expansion into flag columns.

use std::collections::BTreeSet;

use churn_model::{CellValue, Column, ColumnKind, Result, SchemaError, Table};
use tracing::debug;

const STEP: &str = "One-Hot Expand";

/// Separator between source column name and category in generated names.
pub const CATEGORY_SEPARATOR: &str = "_";

/// Name of the flag column generated for `category` of `column`.
pub fn category_column_name(column: &str, category: &str) -> String {
    format!("{column}{CATEGORY_SEPARATOR}{category}")
}

/// Distinct non-missing values of a column, sorted.
pub fn observed_categories(column: &Column) -> BTreeSet<String> {
    column
        .values
        .iter()
        .filter(|value| !value.is_missing())
        .map(CellValue::render)
        .collect()
}

/// Replace each listed column with one flag column per observed category.
///
/// Columns are processed in the given order. Generated columns are appended
/// at the end of the table in sorted category order and the source column is
/// removed. Rows whose source value is missing get `false` everywhere. The
/// category universe is exactly what the table holds, so an empty table
/// yields no generated columns.
///
/// Every listed column is checked before the table is touched. Returns the
/// names of the generated columns.
pub fn one_hot_expand<S: AsRef<str>>(table: &mut Table, columns: &[S]) -> Result<Vec<String>> {
    for column in columns {
        table.require(column.as_ref(), STEP)?;
    }

    let mut added = Vec::new();
    for column in columns {
        let column = column.as_ref();
        let source = table
            .remove_column(column)
            .ok_or_else(|| SchemaError::missing(column, STEP))?;
        let labels: Vec<Option<String>> = source
            .values
            .iter()
            .map(|value| (!value.is_missing()).then(|| value.render()))
            .collect();
        let categories = observed_categories(&source);
        debug!(column, categories = categories.len(), "expanding column");

        for category in &categories {
            let flags = labels
                .iter()
                .map(|label| CellValue::Flag(label.as_deref() == Some(category.as_str())))
                .collect();
            let name = category_column_name(column, category);
            table.push_column(Column::new(name.clone(), ColumnKind::Flag, flags), STEP)?;
            added.push(name);
        }
    }
    Ok(added)
}
