//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::{SourceOptions, WriteMode, DEFAULT_HEADER_SEPARATOR};

/// txt2csv - Transfer delimited text records into a CSV file
#[derive(Parser, Debug)]
#[command(name = "txt2csv")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source text file. '.txt' is appended when there is no extension.
    #[arg(default_value = "src")]
    pub source: PathBuf,

    /// Target CSV file. '.csv' is appended when there is no extension.
    #[arg(default_value = "targ")]
    pub target: PathBuf,

    /// Explicit header fields (comma-separated).
    /// When given, the first source line is read as data instead of a header.
    #[arg(short = 'H', long, value_delimiter = ',')]
    pub header: Vec<String>,

    /// Separator for the header line. Data lines are always split on a single space.
    #[arg(short, long, default_value = DEFAULT_HEADER_SEPARATOR, value_parser = validate_separator)]
    pub separator: String,

    /// Mode for an existing target when prompts are skipped.
    /// Options: "write" (overwrite with header) or "append" (no header)
    #[arg(short, long, default_value = "write", value_parser = parse_mode)]
    pub mode: WriteMode,

    /// Skip interactive prompts: create a missing target and use --mode for an existing one
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Do not show the target's content after writing
    #[arg(long, default_value = "false")]
    pub no_preview: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the content of a CSV file
    Show {
        /// CSV file path. '.csv' is appended when there is no extension.
        path: PathBuf,
    },
}

impl Cli {
    /// Reader settings derived from the header and separator flags.
    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            header: if self.header.is_empty() {
                None
            } else {
                Some(self.header.clone())
            },
            separator: self.separator.clone(),
        }
    }
}

/// Validator for the header separator
fn validate_separator(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("separator must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parser for the write mode
fn parse_mode(s: &str) -> Result<WriteMode, String> {
    s.parse::<WriteMode>().map_err(|e| e.to_string())
}
