//! The exit-failure skeleton.
//!
//! Closes a generated parser function. With error handling enabled the
//! function checks its own result, frees the parser state and exits the
//! process on failure; otherwise it simply returns the result.

use super::writer::{indent_str, write_indented};
use optskel_core::Result;
use std::fmt::{self, Write};

/// Skeleton emitting the tail of a generated parser function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitFailureSkel {
    /// Emit the `EXIT_FAILURE` guard before returning
    handle_error: bool,
    /// Prefix of the generated `<name>_free` call
    parser_name: String,
}

impl ExitFailureSkel {
    /// Creates a skeleton for the given parser, with error handling enabled.
    pub fn new(parser_name: impl Into<String>) -> Self {
        Self {
            handle_error: true,
            parser_name: parser_name.into(),
        }
    }

    #[must_use]
    pub fn with_handle_error(mut self, handle_error: bool) -> Self {
        self.handle_error = handle_error;
        self
    }

    pub fn handle_error(&self) -> bool {
        self.handle_error
    }

    pub fn parser_name(&self) -> &str {
        &self.parser_name
    }

    /// Writes the fragment into `sink`.
    ///
    /// The first line is not prefixed: the caller has already positioned the
    /// cursor. Every following line of the guard starts with `indent` spaces,
    /// and so does the closing `return result;` when the guard is present.
    ///
    /// # Errors
    /// Returns an error only if the sink rejects a write.
    pub fn generate<W: Write + ?Sized>(&self, sink: &mut W, indent: usize) -> fmt::Result {
        let base = indent_str(indent);

        if self.handle_error {
            sink.write_str("if (result == EXIT_FAILURE)")?;
            write!(sink, "\n{base}  {{")?;
            write!(sink, "\n{base}    ")?;
            write_indented(sink, &self.parser_name, indent + 4)?;
            sink.write_str("_free (args_info);")?;
            write!(sink, "\n{base}    exit (EXIT_FAILURE);")?;
            write!(sink, "\n{base}  }}")?;
            write!(sink, "\n{base}")?;
            write!(sink, "\n{base}")?;
        }

        sink.write_str("return result;")
    }

    /// Renders the fragment into a fresh string.
    ///
    /// # Errors
    /// Returns [`optskel_core::Error::Codegen`] if the fragment cannot be written.
    pub fn render(&self, indent: usize) -> Result<String> {
        let mut out = String::new();
        self.generate(&mut out, indent)?;
        Ok(out)
    }
}
