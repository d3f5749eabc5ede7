//! Interactive prompts using dialoguer

use std::path::Path;

use dialoguer::{Confirm, Select};

use crate::pipeline::error::Result;
use crate::pipeline::{TargetPrompt, WriteMode};
use crate::utils::print_warning;

/// Asks the user on the terminal how to treat the CSV target
#[derive(Debug, Default)]
pub struct DialoguerPrompt;

impl TargetPrompt for DialoguerPrompt {
    fn confirm_create(&mut self, target: &Path) -> Result<bool> {
        let message = format!(
            "File '{}' doesn't exist. Do you want to create it?",
            target.display()
        );
        let confirmed = Confirm::new()
            .with_prompt(message)
            .default(true)
            .interact()?;
        Ok(confirmed)
    }

    fn choose_mode(&mut self, target: &Path) -> Result<WriteMode> {
        print_warning(&format!("File '{}' already exists", target.display()));
        let choice = Select::new()
            .with_prompt("Choose action with it")
            .items(&["Rewrite file", "Add to end"])
            .default(0)
            .interact()?;
        Ok(mode_for_choice(choice))
    }
}

/// Map a menu index to its mode: 0 rewrites, anything else appends
fn mode_for_choice(choice: usize) -> WriteMode {
    if choice == 0 {
        WriteMode::Write
    } else {
        WriteMode::Append
    }
}
