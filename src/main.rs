//! txt2csv: Text to CSV Transfer CLI Tool
//!
//! Reads a delimited text file and writes its records to a CSV file,
//! asking before creating or overwriting the target.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use txt2csv::cli::{run_convert, run_show, Cli, Commands};
use txt2csv::pipeline::ConvertError;
use txt2csv::utils::{print_error, print_validation_error};

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let validation = e
                .downcast_ref::<ConvertError>()
                .is_some_and(ConvertError::is_validation);
            if validation {
                print_validation_error(&format!("{:#}", e));
            } else {
                print_error(&format!("{:#}", e));
            }
            // -1 as an 8-bit exit status
            ExitCode::from(255)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(command) = &cli.command {
        return match command {
            Commands::Show { path } => run_show(path),
        };
    }

    run_convert(
        &cli.source,
        &cli.target,
        &cli.source_options(),
        !cli.no_confirm,
        cli.mode,
        !cli.no_preview,
    )
}
