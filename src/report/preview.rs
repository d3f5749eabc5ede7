//! CSV content preview

use std::path::Path;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;

use crate::pipeline::CsvContent;

/// Render CSV content as a table, header first
pub fn csv_content_table(content: &CsvContent) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        content
            .header
            .iter()
            .map(|name| Cell::new(name).add_attribute(Attribute::Bold)),
    );
    for record in &content.records {
        table.add_row(record);
    }
    table
}

pub fn print_csv_content(path: &Path, content: &CsvContent) {
    println!();
    println!(
        "    {} {} {}",
        style("📂").cyan(),
        style("CSV FILE CONTENT").white().bold(),
        style(path.display()).dim()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    if content.records.is_empty() {
        println!("      {}", style("(no records)").dim());
        return;
    }

    for line in csv_content_table(content).to_string().lines() {
        println!("    {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_header_and_records() {
        let content = CsvContent {
            header: vec!["a".to_string(), "b".to_string()],
            records: vec![vec![r#"["1","3"]"#.to_string(), r#"["2","4"]"#.to_string()]],
        };
        let rendered = csv_content_table(&content).to_string();
        assert!(rendered.contains('a'));
        assert!(rendered.contains(r#"["1","3"]"#));
        assert!(rendered.contains(r#"["2","4"]"#));
    }
}
