//! C code skeletons for generated command-line parsers.
//!
//! Each skeleton writes a fixed fragment of C source into any
//! [`std::fmt::Write`] sink at a caller-supplied indentation.

mod exit_failure;
mod writer;

pub use exit_failure::ExitFailureSkel;
pub use writer::{indent_str, write_indented};

use optskel_core::Result;

/// Generates the exit-failure fragment that ends a generated parser function.
///
/// # Arguments
/// * `handle_error` - Whether the generated code frees the parser state and exits on failure
/// * `parser_name` - Prefix of the generated `<name>_free` call
/// * `indent` - Width of the base indentation, in spaces
///
/// # Errors
/// Returns an error if the fragment cannot be written.
///
/// # Examples
/// ```
/// use optskel_codegen::generate_exit_failure;
///
/// let code = generate_exit_failure(false, "cmdline", 2).unwrap();
/// assert_eq!(code, "return result;");
/// ```
pub fn generate_exit_failure(
    handle_error: bool,
    parser_name: &str,
    indent: usize,
) -> Result<String> {
    ExitFailureSkel::new(parser_name)
        .with_handle_error(handle_error)
        .render(indent)
}
