//! Column-level transform operations.
//!
//! Each operation mutates the table in place. Absent columns are reported
//! as [`churn_model::SchemaError`]; the executor discards the table on any
//! error, so no partially transformed table escapes.

mod binary;
mod columns;
mod numeric;
mod one_hot;
mod rows;

pub use binary::{map_binary, map_binary_tracked};
pub use columns::drop_column;
pub use numeric::{coerce_numeric, coerce_numeric_tracked, parse_numeric};
pub use one_hot::{CATEGORY_SEPARATOR, category_column_name, observed_categories, one_hot_expand};
pub use rows::drop_rows_with_missing;
