//! Column kind inference for freshly loaded text cells.

use churn_model::{CellValue, ColumnKind};

/// Parses a trimmed string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Parses a trimmed string as a finite-or-infinite f64; NaN counts as unparseable.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Infer the narrowest kind that fits every present cell.
///
/// A column with no present cells is text.
pub fn infer_kind(cells: &[Option<String>]) -> ColumnKind {
    let mut present = cells.iter().flatten().peekable();
    if present.peek().is_none() {
        return ColumnKind::Text;
    }
    let mut integer = true;
    for cell in present {
        if integer && parse_i64(cell).is_some() {
            continue;
        }
        integer = false;
        if parse_f64(cell).is_none() {
            return ColumnKind::Text;
        }
    }
    if integer {
        ColumnKind::Integer
    } else {
        ColumnKind::Number
    }
}

/// Convert raw cells into values of `kind`.
///
/// `kind` must come from [`infer_kind`] over the same cells, so every parse succeeds.
pub fn convert_cells(cells: Vec<Option<String>>, kind: ColumnKind) -> Vec<CellValue> {
    cells
        .into_iter()
        .map(|cell| match cell {
            None => CellValue::Missing,
            Some(raw) => match kind {
                ColumnKind::Integer => parse_i64(&raw).map_or(CellValue::Text(raw), CellValue::Integer),
                ColumnKind::Number => parse_f64(&raw).map_or(CellValue::Text(raw), CellValue::Number),
                ColumnKind::Text | ColumnKind::Flag => CellValue::Text(raw),
            },
        })
        .collect()
}
