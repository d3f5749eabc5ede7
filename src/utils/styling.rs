//! Terminal styling utilities

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARNING, style(message).yellow());
}

/// Print a fatal error to stderr
pub fn print_error(message: &str) {
    eprintln!(
        "\n {} {}",
        style("✗ Error:").red().bold(),
        style(message).red()
    );
}

/// Print a failed validation check to stderr
pub fn print_validation_error(message: &str) {
    eprintln!(
        "\n {} {}",
        style("✗ Invalid data:").yellow().bold(),
        style(message).yellow()
    );
}
