//! Indentation helpers shared by the skeletons.

use std::fmt::{self, Write};

/// Returns a run of `width` spaces.
pub fn indent_str(width: usize) -> String {
    " ".repeat(width)
}

/// Writes `text`, following every embedded newline with `indent` spaces.
///
/// Substituted values that span several lines keep the column of the line
/// they were inserted into. Single-line text is written unchanged, and a
/// trailing newline is not followed by indentation.
///
/// # Errors
/// Returns an error if the sink rejects a write.
pub fn write_indented<W: Write + ?Sized>(sink: &mut W, text: &str, indent: usize) -> fmt::Result {
    let mut lines = text.split('\n');

    if let Some(first) = lines.next() {
        sink.write_str(first)?;
    }

    let mut lines = lines.peekable();
    while let Some(line) = lines.next() {
        sink.write_char('\n')?;
        if line.is_empty() && lines.peek().is_none() {
            break;
        }
        write!(sink, "{:indent$}", "")?;
        sink.write_str(line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_is_written_verbatim() {
        let mut out = String::new();
        write_indented(&mut out, "cmdline", 8).unwrap();
        assert_eq!(out, "cmdline");
    }

    #[test]
    fn continuation_lines_are_indented() {
        let mut out = String::new();
        write_indented(&mut out, "a\nb\n\nc", 3).unwrap();
        assert_eq!(out, "a\n   b\n   \n   c");
    }

    #[test]
    fn trailing_newline_is_not_indented() {
        let mut out = String::new();
        write_indented(&mut out, "a\nb\n", 4).unwrap();
        assert_eq!(out, "a\n    b\n");

        out.clear();
        write_indented(&mut out, "\n", 4).unwrap();
        assert_eq!(out, "\n");
    }

    #[test]
    fn empty_text_writes_nothing() {
        let mut out = String::new();
        write_indented(&mut out, "", 4).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn indent_str_builds_spaces() {
        assert_eq!(indent_str(0), "");
        assert_eq!(indent_str(3), "   ");
    }
}
