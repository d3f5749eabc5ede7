//! Error types for text-to-CSV transfer.
//!
//! `ConvertError` is what every pipeline operation returns. The two failure
//! kinds callers care about are a missing source file and a
//! `ValidationError`; the remaining variants wrap the underlying I/O, CSV and
//! prompt failures.

use std::path::PathBuf;

use thiserror::Error;

/// A record or argument failed one of the transfer checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A data row has a different number of values than the header.
    ///
    /// `line` is the 1-based line number in the source file.
    #[error("length of row {line} ({found}) is not equal to length of header ({expected})")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The column table has no columns or no rows.
    #[error("data argument has invalid value: the column table is empty")]
    EmptyTable,

    /// The file opening mode is neither write nor append.
    #[error("invalid file opening mode '{0}', expected 'write' or 'append'")]
    InvalidMode(String),

    /// A field name appears more than once in the header.
    #[error("duplicate field '{0}' in header")]
    DuplicateField(String),

    /// A header field has no column in the table, or the reverse.
    #[error("field '{0}' is not shared by header and data")]
    UnknownField(String),

    /// The source file is empty and no explicit header was supplied.
    #[error("source file has no header line")]
    MissingHeader,

    /// The header separator is an empty string.
    #[error("header separator must not be empty")]
    EmptySeparator,

    /// A decoded column holds a different number of values than the first.
    #[error("column '{column}' has {found} value(s), expected {expected}")]
    UnevenColumn {
        column: String,
        expected: usize,
        found: usize,
    },

    /// A CSV record has a different number of cells than the header.
    #[error("record has {found} cell(s) but the header has {expected} field(s)")]
    RecordLength { expected: usize, found: usize },

    /// A CSV cell does not hold a JSON list of values.
    #[error("cell in column '{column}' is not a list of values")]
    MalformedCell { column: String },
}

/// Errors returned by the transfer pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source file does not exist.
    #[error("file '{}' does not exist", path.display())]
    MissingFile { path: PathBuf },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: polars::prelude::PolarsError,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: polars::prelude::PolarsError) -> Self {
        ConvertError::Csv {
            path: path.into(),
            source,
        }
    }

    /// True for errors that come from a failed validation check.
    pub fn is_validation(&self) -> bool {
        matches!(self, ConvertError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_length_message_names_the_line() {
        let err = ValidationError::RowLength {
            line: 3,
            expected: 2,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "length of row 3 (1) is not equal to length of header (2)"
        );
    }

    #[test]
    fn test_missing_file_message() {
        let err = ConvertError::MissingFile {
            path: PathBuf::from("src.txt"),
        };
        assert_eq!(err.to_string(), "file 'src.txt' does not exist");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: ConvertError = ValidationError::EmptyTable.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), ValidationError::EmptyTable.to_string());
    }
}
