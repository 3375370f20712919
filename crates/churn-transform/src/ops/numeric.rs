//! Lossy numeric coercion.

use churn_model::{CellValue, ColumnKind, Result, Table, ValueCoercionWarning};
use tracing::debug;

const STEP: &str = "Numeric Coerce";

/// Parse a string value to f64.
///
/// Surrounding whitespace is ignored. Empty strings, words and `NaN`
/// spellings are unparseable.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn coerce_cell(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Missing => None,
        CellValue::Integer(v) => Some(*v as f64),
        CellValue::Number(v) => Some(*v).filter(|v| !v.is_nan()),
        CellValue::Flag(v) => Some(if *v { 1.0 } else { 0.0 }),
        CellValue::Text(text) => parse_numeric(text),
    }
}

/// Reinterpret every value in `column` as a number.
///
/// Values that cannot be parsed become missing; this never fails on values.
/// Returns the number of newly missing cells.
pub fn coerce_numeric(table: &mut Table, column: &str) -> Result<usize> {
    let mut warning = ValueCoercionWarning::new(STEP, column);
    coerce_numeric_tracked(table, column, &mut warning)?;
    Ok(warning.count)
}

/// [`coerce_numeric`], recording each unparseable token in `warning`.
pub fn coerce_numeric_tracked(
    table: &mut Table,
    column: &str,
    warning: &mut ValueCoercionWarning,
) -> Result<()> {
    let target = table.require_mut(column, STEP)?;
    for cell in &mut target.values {
        if cell.is_missing() {
            continue;
        }
        match coerce_cell(cell) {
            Some(value) => *cell = CellValue::Number(value),
            None => {
                warning.record(&cell.render());
                *cell = CellValue::Missing;
            }
        }
    }
    target.kind = ColumnKind::Number;
    debug!(column, newly_missing = warning.count, "coerced column to numeric");
    Ok(())
}
