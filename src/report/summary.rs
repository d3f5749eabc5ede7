//! Transfer summary report

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{Transfer, WriteMode};

/// Summary of one text to CSV transfer
#[derive(Debug, Clone)]
pub struct TransferSummary {
    pub source: String,
    pub target: String,
    pub mode: WriteMode,
    pub fields: Vec<String>,
    pub rows: usize,
}

impl From<&Transfer> for TransferSummary {
    fn from(transfer: &Transfer) -> Self {
        Self {
            source: transfer.source.display().to_string(),
            target: transfer.target.display().to_string(),
            mode: transfer.mode,
            fields: transfer.header.clone(),
            rows: transfer.rows,
        }
    }
}

impl TransferSummary {
    /// Render the summary as a two-column table
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📄 Source"), Cell::new(&self.source)]);
        table.add_row(vec![Cell::new("💾 Target"), Cell::new(&self.target)]);
        table.add_row(vec![
            Cell::new("✏️  Mode"),
            Cell::new(self.mode).fg(match self.mode {
                WriteMode::Write => Color::Yellow,
                WriteMode::Append => Color::Cyan,
            }),
        ]);
        table.add_row(vec![
            Cell::new("🏷️  Fields"),
            Cell::new(self.fields.join(", ")),
        ]);
        table.add_row(vec![
            Cell::new("✅ Rows"),
            Cell::new(self.rows)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("TRANSFER SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.to_table().to_string().lines() {
            println!("    {}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_summary_from_transfer() {
        let transfer = Transfer {
            source: PathBuf::from("src.txt"),
            target: PathBuf::from("targ.csv"),
            mode: WriteMode::Append,
            header: vec!["a".to_string(), "b".to_string()],
            rows: 2,
        };
        let summary = TransferSummary::from(&transfer);
        assert_eq!(summary.source, "src.txt");
        assert_eq!(summary.target, "targ.csv");
        assert_eq!(summary.rows, 2);

        let rendered = summary.to_table().to_string();
        assert!(rendered.contains("append"));
        assert!(rendered.contains("a, b"));
    }
}
