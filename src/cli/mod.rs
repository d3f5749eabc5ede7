//! CLI module - argument parsing, interactive prompts and commands

mod args;
pub mod convert;
mod prompts;

pub use args::{Cli, Commands};
pub use convert::{run_convert, run_show};
pub use prompts::*;
