#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::value::{CellValue, ColumnKind};

/// One named, typed column of a [`Table`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Build a text column; `None` entries become missing.
    pub fn from_text<S: AsRef<str>>(name: impl Into<String>, values: &[Option<S>]) -> Self {
        let values = values
            .iter()
            .map(|value| match value {
                Some(text) => CellValue::text(text.as_ref()),
                None => CellValue::Missing,
            })
            .collect();
        Self::new(name, ColumnKind::Text, values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_missing()).count()
    }
}

/// Columnar in-memory record table.
///
/// Every column holds exactly `height` values. The height is stored
/// separately so a table with no columns still knows its row count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
    height: usize,
}

impl Table {
    /// Create a table with `height` rows and no columns.
    pub fn new(height: usize) -> Self {
        Self {
            columns: Vec::new(),
            height,
        }
    }

    /// Build a table from columns, checking lengths and name uniqueness.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let height = columns.first().map_or(0, Column::len);
        let mut table = Self::new(height);
        for column in columns {
            table.push_column(column, "table construction")?;
        }
        Ok(table)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Look up a column that `step` requires, failing with [`SchemaError::MissingColumn`].
    pub fn require(&self, name: &str, step: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| SchemaError::missing(name, step))
    }

    /// Mutable variant of [`Table::require`].
    pub fn require_mut(&mut self, name: &str, step: &str) -> Result<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| SchemaError::missing(name, step))
    }

    /// Append a column at the end of the table.
    pub fn push_column(&mut self, column: Column, step: &str) -> Result<()> {
        if self.contains(&column.name) {
            return Err(SchemaError::duplicate(column.name, step));
        }
        if self.columns.is_empty() && self.height == 0 {
            self.height = column.len();
        }
        let actual = column.len();
        if actual != self.height {
            return Err(SchemaError::LengthMismatch {
                column: column.name,
                expected: self.height,
                actual,
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Remove and return a column.
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let idx = self.position(name)?;
        Some(self.columns.remove(idx))
    }

    /// Keep only the rows whose entry in `keep` is true.
    ///
    /// `keep` must have one entry per row; relative row order is preserved.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.height);
        for column in &mut self.columns {
            let mut flags = keep.iter();
            column
                .values
                .retain(|_| flags.next().copied().unwrap_or(false));
        }
        self.height = keep.iter().filter(|flag| **flag).count();
    }

    /// Cells of row `idx`, in column order.
    pub fn row(&self, idx: usize) -> Option<Vec<&CellValue>> {
        if idx >= self.height {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[idx]).collect())
    }

    /// Iterate rows as vectors of cell references.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&CellValue>> + '_ {
        (0..self.height).map(move |idx| self.columns.iter().map(|c| &c.values[idx]).collect())
    }

    /// Count of missing cells in a column, or `None` if the column is absent.
    pub fn missing_count(&self, name: &str) -> Option<usize> {
        self.column(name).map(Column::missing_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(vec![
            Column::from_text("id", &[Some("a"), Some("b"), Some("c")]),
            Column::new(
                "n",
                ColumnKind::Integer,
                vec![
                    CellValue::Integer(1),
                    CellValue::Missing,
                    CellValue::Integer(3),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn from_columns_checks_lengths() {
        let err = Table::from_columns(vec![
            Column::from_text("a", &[Some("x"), Some("y")]),
            Column::from_text("b", &[Some("x")]),
        ])
        .unwrap_err();
        assert!(matches!(err, SchemaError::LengthMismatch { .. }));
    }

    #[test]
    fn push_column_reports_mismatched_length() {
        let mut table = sample();
        let err = table
            .push_column(Column::from_text("short", &[Some("x")]), "test")
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::LengthMismatch { ref column, expected: 3, actual: 1 } if column == "short"
        ));
        assert_eq!(table.width(), 2);
    }

    #[test]
    fn from_columns_rejects_duplicates() {
        let err = Table::from_columns(vec![
            Column::from_text("a", &[Some("x")]),
            Column::from_text("a", &[Some("y")]),
        ])
        .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateColumn { .. }));
    }

    #[test]
    fn retain_rows_preserves_order() {
        let mut table = sample();
        table.retain_rows(&[true, false, true]);
        assert_eq!(table.height(), 2);
        let ids: Vec<String> = table.column("id").unwrap().values.iter().map(CellValue::render).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(table.missing_count("n"), Some(0));
    }

    #[test]
    fn height_survives_removing_all_columns() {
        let mut table = sample();
        table.remove_column("id");
        table.remove_column("n");
        assert_eq!(table.width(), 0);
        assert_eq!(table.height(), 3);
    }

    #[test]
    fn require_reports_step() {
        let table = sample();
        let err = table.require("missing", "Drop Column").unwrap_err();
        assert_eq!(err, SchemaError::missing("missing", "Drop Column"));
    }

    #[test]
    fn rows_follow_column_order() {
        let table = sample();
        let first = table.row(0).unwrap();
        assert_eq!(first, vec![&CellValue::text("a"), &CellValue::Integer(1)]);
        assert_eq!(table.rows().count(), 3);
        assert!(table.row(3).is_none());
    }
}
