//! Checks for identifiers substituted into generated C code.

use crate::{Error, Result};

/// Validates that `name` can be used as the prefix of a generated C identifier.
///
/// The name is pasted in front of `_free`, so it must be non-empty, start
/// with an ASCII letter or `_`, and contain only ASCII letters, digits and `_`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] describing the first offending character.
pub fn validate_parser_name(name: &str) -> Result<()> {
    let mut chars = name.char_indices();

    let Some((_, first)) = chars.next() else {
        return Err(Error::InvalidArgument("parser name is empty".to_string()));
    };

    if first.is_ascii_digit() {
        return Err(Error::InvalidArgument(format!(
            "parser name '{name}' starts with a digit"
        )));
    }

    for (pos, c) in std::iter::once((0, first)).chain(chars) {
        if !is_ident_char(c) {
            return Err(Error::InvalidArgument(format!(
                "parser name '{}' contains {c:?} at byte {pos}",
                name.escape_debug()
            )));
        }
    }

    Ok(())
}

const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
