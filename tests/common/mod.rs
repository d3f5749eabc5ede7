//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use txt2csv::pipeline::ColumnTable;

/// Create a temporary directory holding a text source with the given lines
pub fn create_temp_txt(name: &str, lines: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = write_txt(&temp_dir, name, lines);
    (temp_dir, path)
}

/// Write a text source into an existing directory
pub fn write_txt(temp_dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = temp_dir.path().join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(&path, content).unwrap();
    path
}

/// Header line and two rows: "a b", "1 2", "3 4"
pub fn sample_lines() -> Vec<&'static str> {
    vec!["a b", "1 2", "3 4"]
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Build a column table from rows, numbering lines from 1
pub fn table_from_rows(header: &[&str], rows: &[&[&str]]) -> ColumnTable {
    let mut table = ColumnTable::new(&strings(header)).unwrap();
    for (i, row) in rows.iter().enumerate() {
        table.push_row(strings(row), i + 1).unwrap();
    }
    table
}

/// Read a file's lines as owned strings
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
