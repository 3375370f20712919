//! Delimited-text reading into a typed [`Table`].

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use churn_model::{Column, Table};

use crate::error::{IngestError, Result};
use crate::infer::{convert_cells, infer_kind};
use crate::options::IngestOptions;

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Read a delimited file with a header row.
///
/// Cells matching a missing token load as missing; other cells keep their
/// exact text until kind inference parses them.
pub fn read_table(path: &Path, options: &IngestOptions) -> Result<Table> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let table = read_table_from_reader(BufReader::new(file), path, options)?;
    info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "table loaded"
    );
    Ok(table)
}

/// Read a delimited table from any reader; `source` is only used in errors.
pub fn read_table_from_reader<R: Read>(
    reader: R,
    source: &Path,
    options: &IngestOptions,
) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);
    let parse_error = |e: csv::Error| IngestError::CsvParse {
        path: source.to_path_buf(),
        source: e,
    };

    let mut records = reader.records();
    let headers = loop {
        match records.next() {
            Some(record) => {
                let record = record.map_err(parse_error)?;
                if record.iter().all(|v| v.trim().is_empty()) {
                    continue;
                }
                break record.iter().map(normalize_header).collect::<Vec<_>>();
            }
            None => {
                return Err(IngestError::EmptyCsv {
                    path: source.to_path_buf(),
                });
            }
        }
    };
    validate_headers(&headers, source)?;

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in records {
        let record = record.map_err(parse_error)?;
        for (idx, column) in cells.iter_mut().enumerate() {
            match record.get(idx) {
                Some(raw) if !options.is_missing_token(raw) => {
                    column.push(Some(raw.to_string()));
                }
                _ => column.push(None),
            }
        }
    }
    let height = cells.first().map_or(0, Vec::len);
    let mut table = Table::new(height);
    for (name, column_cells) in headers.into_iter().zip(cells) {
        let kind = infer_kind(&column_cells);
        debug!(column = %name, kind = %kind, "inferred column kind");
        let values = convert_cells(column_cells, kind);
        table
            .push_column(Column::new(name.clone(), kind, values), "ingest")
            .map_err(|_| IngestError::DuplicateColumnName {
                path: source.to_path_buf(),
                column: name,
            })?;
    }
    Ok(table)
}

fn validate_headers(headers: &[String], source: &Path) -> Result<()> {
    let mut seen = BTreeSet::new();
    for (index, name) in headers.iter().enumerate() {
        if name.is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: source.to_path_buf(),
                index,
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(IngestError::DuplicateColumnName {
                path: source.to_path_buf(),
                column: name.clone(),
            });
        }
    }
    Ok(())
}
