//! Column-oriented table and file opening mode

use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// Column-oriented view of the parsed rows.
///
/// Keys are unique field names kept in header order; every column holds the
/// same number of values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTable {
    columns: Vec<(String, Vec<String>)>,
}

impl ColumnTable {
    /// Create an empty table with one column per header field.
    pub fn new(header: &[String]) -> Result<Self, ValidationError> {
        let mut columns: Vec<(String, Vec<String>)> = Vec::with_capacity(header.len());
        for name in header {
            if columns.iter().any(|(existing, _)| existing == name) {
                return Err(ValidationError::DuplicateField(name.clone()));
            }
            columns.push((name.clone(), Vec::new()));
        }
        Ok(Self { columns })
    }

    /// Append one row, distributing its values over the columns.
    ///
    /// `line` is the source line number reported when the row length does
    /// not match the header.
    pub fn push_row(&mut self, row: Vec<String>, line: usize) -> Result<(), ValidationError> {
        if row.len() != self.columns.len() {
            return Err(ValidationError::RowLength {
                line,
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        for ((_, values), value) in self.columns.iter_mut().zip(row) {
            values.push(value);
        }
        Ok(())
    }

    /// Build a table from named columns, e.g. decoded CSV cells.
    ///
    /// Every column must hold as many values as the first one.
    pub fn from_columns(
        columns: Vec<(String, Vec<String>)>,
    ) -> Result<Self, ValidationError> {
        let header: Vec<String> = columns.iter().map(|(name, _)| name.clone()).collect();
        Self::new(&header)?;

        if let Some((_, first)) = columns.first() {
            let expected = first.len();
            if let Some((name, values)) = columns.iter().find(|(_, v)| v.len() != expected) {
                return Err(ValidationError::UnevenColumn {
                    column: name.clone(),
                    expected,
                    found: values.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    pub fn field_names(&self) -> Vec<String> {
        self.columns.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, values)| values.as_slice())
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, values)| values.len())
    }

    /// A table with no columns or no rows has nothing to write.
    pub fn is_empty(&self) -> bool {
        self.column_count() == 0 || self.row_count() == 0
    }
}

/// File opening discipline for the CSV target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate the target and emit a header line
    Write,
    /// Add to the end of the target without a header line
    Append,
}

impl WriteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteMode::Write => "write",
            WriteMode::Append => "append",
        }
    }

    pub fn writes_header(&self) -> bool {
        matches!(self, WriteMode::Write)
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WriteMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "write" | "w" => Ok(WriteMode::Write),
            "append" | "a" => Ok(WriteMode::Append),
            other => Err(ValidationError::InvalidMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_push_rows_builds_columns() {
        let mut table = ColumnTable::new(&header(&["a", "b"])).unwrap();
        table.push_row(row(&["1", "2"]), 2).unwrap();
        table.push_row(row(&["3", "4"]), 3).unwrap();

        assert_eq!(table.get("a").unwrap(), &["1", "3"]);
        assert_eq!(table.get("b").unwrap(), &["2", "4"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.field_names(), header(&["a", "b"]));
    }

    #[test]
    fn test_push_row_rejects_wrong_length() {
        let mut table = ColumnTable::new(&header(&["a", "b"])).unwrap();
        let err = table.push_row(row(&["1"]), 5).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RowLength {
                line: 5,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(table.row_count(), 0, "Rejected row must not be stored");
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = ColumnTable::new(&header(&["a", "b", "a"])).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateField("a".to_string()));
    }

    #[test]
    fn test_from_columns_rejects_uneven_lengths() {
        let err = ColumnTable::from_columns(vec![
            ("a".to_string(), row(&["1", "2"])),
            ("b".to_string(), row(&["3"])),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnevenColumn {
                column: "b".to_string(),
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_columns_keeps_order() {
        let table = ColumnTable::from_columns(vec![
            ("b".to_string(), row(&["1"])),
            ("a".to_string(), row(&["2"])),
        ])
        .unwrap();
        assert_eq!(table.field_names(), header(&["b", "a"]));
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_emptiness() {
        assert!(ColumnTable::default().is_empty());
        let table = ColumnTable::new(&header(&["a"])).unwrap();
        assert!(table.is_empty(), "Columns without rows count as empty");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("write".parse::<WriteMode>(), Ok(WriteMode::Write));
        assert_eq!("w".parse::<WriteMode>(), Ok(WriteMode::Write));
        assert_eq!("append".parse::<WriteMode>(), Ok(WriteMode::Append));
        assert_eq!("a".parse::<WriteMode>(), Ok(WriteMode::Append));

        for bad in ["", "x", "rw", "Write", "APPEND"] {
            assert_eq!(
                bad.parse::<WriteMode>(),
                Err(ValidationError::InvalidMode(bad.to_string())),
                "'{}' should be rejected",
                bad
            );
        }
    }
}
