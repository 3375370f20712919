//! Delimited-text output for a [`Table`].

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::info;

use churn_model::Table;

use crate::error::{IngestError, Result};

/// Encode the header and every row to `writer`.
pub fn write_table_to_writer<W: Write>(table: &Table, writer: W, delimiter: u8) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    writer.write_record(table.column_names())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.render()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the table as delimited text in memory.
pub fn render_table(table: &Table, delimiter: u8) -> csv::Result<String> {
    let mut buffer = Vec::new();
    write_table_to_writer(table, &mut buffer, delimiter)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the table to `path`.
///
/// The data goes to a sibling temporary file that is renamed over `path`
/// once complete, so a failed write never leaves a truncated output.
pub fn write_table(table: &Table, path: &Path, delimiter: u8) -> Result<()> {
    let staging = staging_path(path);
    let result = write_staged(table, &staging, path, delimiter);
    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result?;
    info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "table written"
    );
    Ok(())
}

fn write_staged(table: &Table, staging: &Path, path: &Path, delimiter: u8) -> Result<()> {
    let write_error = |source: std::io::Error| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    let file = fs::File::create(staging).map_err(write_error)?;
    write_table_to_writer(table, file, delimiter).map_err(|source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })?;
    fs::rename(staging, path).map_err(write_error)
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.csv".to_string());
    path.with_file_name(format!(".{name}.partial"))
}
