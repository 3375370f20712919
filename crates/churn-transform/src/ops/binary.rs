//! Exact-token binary mapping.

use churn_model::{CellValue, ColumnKind, Result, Table, ValueCoercionWarning};
use tracing::debug;

use crate::config::BinaryMapping;

const STEP: &str = "Binary Map";

/// Replace each value in `column` using an exact-match token mapping.
///
/// Tokens are compared verbatim: no trimming, no case folding. Any present
/// value without a mapping key (including non-text values) becomes missing
/// silently. Returns the number of newly missing cells.
pub fn map_binary(table: &mut Table, column: &str, mapping: &BinaryMapping) -> Result<usize> {
    let mut warning = ValueCoercionWarning::new(STEP, column);
    map_binary_tracked(table, column, mapping, &mut warning)?;
    Ok(warning.count)
}

/// [`map_binary`], recording each unmapped token in `warning`.
pub fn map_binary_tracked(
    table: &mut Table,
    column: &str,
    mapping: &BinaryMapping,
    warning: &mut ValueCoercionWarning,
) -> Result<()> {
    let target = table.require_mut(column, STEP)?;
    for cell in &mut target.values {
        if cell.is_missing() {
            continue;
        }
        let code = cell.as_text().and_then(|token| mapping.get(token)).copied();
        match code {
            Some(code) => *cell = CellValue::Integer(code),
            None => {
                warning.record(&cell.render());
                *cell = CellValue::Missing;
            }
        }
    }
    target.kind = ColumnKind::Integer;
    debug!(column, unmapped = warning.count, "mapped column to binary codes");
    Ok(())
}
