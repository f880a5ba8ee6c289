//! Error types and result aliases for optskel.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for optskel.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(optskel::invalid_argument),
        help("parser names must be C identifiers: ASCII letters, digits and '_', not starting with a digit")
    )]
    InvalidArgument(String),

    #[error("Code generation error: {0}")]
    Codegen(String),
}

impl From<std::fmt::Error> for Error {
    fn from(_: std::fmt::Error) -> Self {
        Self::Codegen("failed to write to output sink".to_string())
    }
}

/// Result type alias using the optskel Error type.
pub type Result<T> = std::result::Result<T, Error>;
