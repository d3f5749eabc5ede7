//! Text source reader

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::{ConvertError, Result, ValidationError};
use super::table::ColumnTable;

/// Separator for data lines.
///
/// Data rows are always split on a single space, whatever separator the
/// header line uses.
pub const DATA_SEPARATOR: char = ' ';

/// Default separator for the header line
pub const DEFAULT_HEADER_SEPARATOR: &str = " ";

/// Read a header and column table from a text file.
///
/// When `header` is `None` the first line is the header, split on
/// `separator`. Every following line is a data row split on
/// [`DATA_SEPARATOR`]. Trailing whitespace is trimmed from each line.
///
/// # Errors
/// `ValidationError::RowLength` names the 1-based source line of the first
/// row whose length differs from the header.
pub fn read_txt_data(
    path: &Path,
    header: Option<&[String]>,
    separator: &str,
) -> Result<(Vec<String>, ColumnTable)> {
    if separator.is_empty() {
        return Err(ValidationError::EmptySeparator.into());
    }

    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    let mut lines = BufReader::new(file).lines();

    let (fieldnames, first_data_line) = match header {
        Some(explicit) => (explicit.to_vec(), 1),
        None => {
            let line = lines
                .next()
                .ok_or(ValidationError::MissingHeader)?
                .map_err(|e| ConvertError::io(path, e))?;
            (split_line(&line, separator), 2)
        }
    };

    let mut table = ColumnTable::new(&fieldnames)?;
    for (offset, line) in lines.enumerate() {
        let line = line.map_err(|e| ConvertError::io(path, e))?;
        let values: Vec<String> = line
            .trim_end()
            .split(DATA_SEPARATOR)
            .map(str::to_string)
            .collect();
        table.push_row(values, first_data_line + offset)?;
    }

    Ok((fieldnames, table))
}

fn split_line(line: &str, separator: &str) -> Vec<String> {
    line.trim_end().split(separator).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_line_trims_trailing_whitespace() {
        assert_eq!(split_line("a;b;c \r", ";"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_line_keeps_empty_fields() {
        assert_eq!(split_line("a  b", " "), vec!["a", "", "b"]);
    }
}
