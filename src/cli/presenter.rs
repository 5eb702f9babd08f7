//! CLI presenter for output formatting

use colored::*;

use crate::domain::notification::CommandLine;

/// Presenter for CLI output formatting.
///
/// Status goes to stderr; notifier output, config values and dry-run
/// command lines go to stdout.
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Output notifier stdout verbatim, without adding a newline
    pub fn passthrough(&self, text: &str) {
        if !text.is_empty() {
            print!("{}", text);
        }
    }

    /// Print a command line that would have been run
    pub fn command(&self, command: &CommandLine) {
        println!("{}", format_command(command));
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a command line as the space-joined string the notifier receives
pub fn format_command(command: &CommandLine) -> String {
    command.to_string()
}
