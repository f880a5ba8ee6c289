//! Utility functions and constants shared across the CLI.

use colored::Colorize;
use optskel_utils::Config;
use std::path::Path;

/// Parser name used when neither the command line nor optskel.toml names one.
pub const DEFAULT_PARSER_NAME: &str = "cmdline_parser";

/// Prints a status message with colored output.
///
/// Status goes to stderr so that stdout carries only generated code.
pub fn print_status(status: &str, message: &str) {
    eprintln!("{} {message}", status.green().bold());
}

/// Prints a status message with the configured parser and its location.
pub fn print_config_status(status: &str, config: &Config, path: &Path) {
    eprintln!(
        "{} parser '{}' ({})",
        status.green().bold(),
        config.parser.name,
        path.display()
    );
}
