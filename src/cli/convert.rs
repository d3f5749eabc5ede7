//! Text to CSV transfer and CSV preview commands

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::pipeline::{
    from_txt, read_csv, with_default_extension, FixedPrompt, Outcome, SourceOptions,
    TargetPrompt, WriteMode, TARGET_EXTENSION,
};
use crate::report::{print_csv_content, TransferSummary};
use crate::utils::{create_spinner, finish_with_success, print_info, print_success};

use super::DialoguerPrompt;

/// Run the text to CSV transfer
///
/// # Arguments
/// * `source` - Source text path, `.txt` appended when it has no extension
/// * `target` - Target CSV path, `.csv` appended when it has no extension
/// * `options` - Header and separator settings for the source
/// * `interactive` - Ask before creating or overwriting the target
/// * `mode` - Mode used for an existing target when not interactive
/// * `preview` - Show the target's content after writing
pub fn run_convert(
    source: &Path,
    target: &Path,
    options: &SourceOptions,
    interactive: bool,
    mode: WriteMode,
    preview: bool,
) -> Result<()> {
    println!(
        "\n {} Transferring TXT to CSV",
        style("◆").cyan().bold()
    );
    println!();

    let mut prompt: Box<dyn TargetPrompt> = if interactive {
        Box::new(DialoguerPrompt)
    } else {
        Box::new(FixedPrompt::new(true, mode))
    };

    let outcome = from_txt(source, target, options, prompt.as_mut())?;

    let transfer = match outcome {
        Outcome::Written(transfer) => transfer,
        Outcome::Cancelled { target, .. } => {
            print_info(&format!(
                "Target '{}' was not created, nothing written",
                target.display()
            ));
            return Ok(());
        }
    };

    TransferSummary::from(&transfer).display();

    println!();
    print_success(&format!(
        "CSV file '{}' was successfully written with data from TXT file '{}'",
        transfer.target.display(),
        transfer.source.display()
    ));

    if preview {
        show_csv(&transfer.target)?;
    }

    Ok(())
}

/// Read a CSV file back and show its content
pub fn run_show(path: &Path) -> Result<()> {
    let path = with_default_extension(path, TARGET_EXTENSION);
    show_csv(&path)
}

fn show_csv(path: &Path) -> Result<()> {
    let spinner = create_spinner("Reading CSV...");
    let content = read_csv(path)?;
    finish_with_success(
        &spinner,
        &format!("Read {} record(s)", content.records.len()),
    );

    print_csv_content(path, &content);
    Ok(())
}
