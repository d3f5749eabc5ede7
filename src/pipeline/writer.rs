//! CSV target writer

use std::fs::{File, OpenOptions};
use std::path::Path;

use polars::prelude::*;

use super::error::{ConvertError, Result, ValidationError};
use super::table::{ColumnTable, WriteMode};

/// Write a column table to a CSV file, parsing `mode` first.
///
/// `mode` must be `write`/`w` or `append`/`a`; anything else is a
/// `ValidationError::InvalidMode`.
pub fn write_csv(path: &Path, header: &[String], table: &ColumnTable, mode: &str) -> Result<()> {
    let mode: WriteMode = mode.parse()?;
    write_table(path, header, table, mode)
}

/// Write a column table to a CSV file as a single record.
///
/// Every column's full value list becomes one cell, encoded as a JSON array
/// of strings. [`WriteMode::Write`] truncates the file and emits the header
/// line; [`WriteMode::Append`] adds the record to the end without one.
pub fn write_table(
    path: &Path,
    header: &[String],
    table: &ColumnTable,
    mode: WriteMode,
) -> Result<()> {
    if table.is_empty() {
        return Err(ValidationError::EmptyTable.into());
    }

    let cells = encode_cells(header, table)?;
    let columns: Vec<Column> = header
        .iter()
        .zip(cells)
        .map(|(name, cell)| Column::new(name.as_str().into(), vec![cell]))
        .collect();
    let mut df = DataFrame::new(columns).map_err(|e| ConvertError::csv(path, e))?;

    let mut file = open_target(path, mode)?;
    CsvWriter::new(&mut file)
        .include_header(mode.writes_header())
        .finish(&mut df)
        .map_err(|e| ConvertError::csv(path, e))?;

    Ok(())
}

/// Encode each column in header order as one JSON array cell.
pub fn encode_cells(header: &[String], table: &ColumnTable) -> Result<Vec<String>> {
    // Rejects duplicate names in the header itself
    ColumnTable::new(header)?;

    if let Some((extra, _)) = table
        .columns()
        .find(|(name, _)| !header.iter().any(|h| h == name))
    {
        return Err(ValidationError::UnknownField(extra.to_string()).into());
    }

    header
        .iter()
        .map(|name| -> Result<String> {
            let values = table
                .get(name)
                .ok_or_else(|| ValidationError::UnknownField(name.clone()))?;
            Ok(serde_json::to_string(values)?)
        })
        .collect()
}

fn open_target(path: &Path, mode: WriteMode) -> Result<File> {
    let opened = match mode {
        WriteMode::Write => File::create(path),
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path),
    };
    opened.map_err(|e| ConvertError::io(path, e))
}
