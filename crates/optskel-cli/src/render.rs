//! Settings resolution and skeleton rendering.

use anyhow::{Context, Result};
use miette::Report;
use optskel_codegen::ExitFailureSkel;
use optskel_utils::Config;

use crate::utils::DEFAULT_PARSER_NAME;

/// Values given on the command line; each one overrides optskel.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub parser_name: Option<String>,
    pub indent: Option<usize>,
    pub handle_error: Option<bool>,
}

/// Fully resolved emission settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub parser_name: String,
    pub indent: usize,
    pub handle_error: bool,
}

impl Settings {
    /// Merges command-line overrides over an optional configuration.
    ///
    /// Without a configuration the parser name falls back to
    /// [`DEFAULT_PARSER_NAME`], with error handling on and no indentation.
    pub fn resolve(config: Option<&Config>, overrides: &Overrides) -> Self {
        let base = config.map_or_else(|| Config::new(DEFAULT_PARSER_NAME), Clone::clone);

        Self {
            parser_name: overrides
                .parser_name
                .clone()
                .unwrap_or(base.parser.name),
            indent: overrides.indent.unwrap_or(base.parser.indent),
            handle_error: overrides.handle_error.unwrap_or(base.parser.handle_error),
        }
    }

    /// Builds the exit-failure skeleton for these settings.
    pub fn skeleton(&self) -> ExitFailureSkel {
        ExitFailureSkel::new(self.parser_name.as_str()).with_handle_error(self.handle_error)
    }
}

/// Validates the parser name, reporting problems as a diagnostic on stderr.
///
/// # Errors
/// Returns an error if the parser name is not a valid C identifier.
pub fn validate(settings: &Settings) -> Result<()> {
    optskel_core::validate_parser_name(&settings.parser_name).map_err(|e| {
        eprintln!("{:?}", Report::new(e));
        anyhow::anyhow!("Invalid parser name")
    })
}

/// Validates the settings and renders the exit-failure skeleton.
///
/// # Errors
/// Returns an error if validation or generation fails.
pub fn render_exit_failure(settings: &Settings) -> Result<String> {
    validate(settings)?;
    settings
        .skeleton()
        .render(settings.indent)
        .with_context(|| "Code generation failed")
}
