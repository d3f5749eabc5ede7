//! CSV read-back for previewing written targets

use std::path::Path;

use polars::prelude::*;

use super::error::{ConvertError, Result, ValidationError};
use super::table::ColumnTable;

/// Header and string records of a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvContent {
    pub header: Vec<String>,
    pub records: Vec<Vec<String>>,
}

/// Read a CSV file with a header line, keeping every value as a string.
pub fn read_csv(path: &Path) -> Result<CsvContent> {
    if !path.is_file() {
        return Err(ConvertError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    // The header line is parsed as an ordinary row so quoted names are
    // unescaped the same way as values. Zero-length schema inference reads
    // every column as String.
    let df = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| ConvertError::csv(path, e))?;

    let mut rows: Vec<Vec<String>> = vec![Vec::with_capacity(df.width()); df.height()];
    for column in df.get_columns() {
        let values = column.str().map_err(|e| ConvertError::csv(path, e))?;
        for (row, value) in rows.iter_mut().zip(values.into_iter()) {
            row.push(value.unwrap_or_default().to_string());
        }
    }

    let mut rows = rows.into_iter();
    let header = rows.next().unwrap_or_default();
    Ok(CsvContent {
        header,
        records: rows.collect(),
    })
}

/// Decode one written record back into its column table.
pub fn decode_record(header: &[String], record: &[String]) -> Result<ColumnTable> {
    if record.len() != header.len() {
        return Err(ValidationError::RecordLength {
            expected: header.len(),
            found: record.len(),
        }
        .into());
    }

    let columns = header
        .iter()
        .zip(record)
        .map(|(name, cell)| {
            serde_json::from_str::<Vec<String>>(cell)
                .map(|values| (name.clone(), values))
                .map_err(|_| ValidationError::MalformedCell {
                    column: name.clone(),
                })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(ColumnTable::from_columns(columns)?)
}
