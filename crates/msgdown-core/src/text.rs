//! Whitespace normalization and small string helpers shared by the rules.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Collapse whitespace in an ordinary text node.
///
/// Runs of whitespace become a single space and whitespace-only text
/// becomes exactly one space. Empty text stays empty.
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    if text.is_empty() {
        return Cow::Borrowed(text);
    }
    if text.trim().is_empty() {
        return Cow::Borrowed(" ");
    }
    WHITESPACE_RUN.replace_all(text, " ")
}

/// Longest run of consecutive backticks
pub fn longest_backtick_run(text: &str) -> usize {
    text.chars()
        .fold((0, 0), |(max, current), c| {
            if c == '`' {
                (max.max(current + 1), current + 1)
            } else {
                (max, 0)
            }
        })
        .0
}

/// Number of leading spaces and tabs
pub fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

/// Drop up to `columns` leading whitespace characters.
pub fn strip_columns(line: &str, columns: usize) -> &str {
    let skip = leading_whitespace(line).min(columns);
    // spaces and tabs are single-byte
    &line[skip..]
}

/// Escape pipe characters for use inside a table cell
pub fn escape_pipes(text: &str) -> Cow<'_, str> {
    if text.contains('|') {
        Cow::Owned(text.replace('|', "\\|"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Remove trailing spaces and tabs, leaving newlines alone.
pub fn trim_trailing_blanks(buf: &mut String) {
    let kept = buf.trim_end_matches([' ', '\t']).len();
    buf.truncate(kept);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("Hello   \n\t world"), "Hello world");
        assert_eq!(collapse_whitespace("  padded  "), " padded ");
        assert_eq!(collapse_whitespace("\n   \n"), " ");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_longest_backtick_run() {
        assert_eq!(longest_backtick_run("plain"), 0);
        assert_eq!(longest_backtick_run("a `b` c"), 1);
        assert_eq!(longest_backtick_run("``many`` `backticks`"), 2);
        assert_eq!(longest_backtick_run("```"), 3);
    }

    #[test]
    fn test_strip_columns() {
        assert_eq!(strip_columns("    code", 2), "  code");
        assert_eq!(strip_columns("  code", 4), "code");
        assert_eq!(strip_columns("\tcode", 1), "code");
        assert_eq!(leading_whitespace(" \t x"), 3);
    }

    #[test]
    fn test_escape_pipes() {
        assert_eq!(escape_pipes("a | b"), "a \\| b");
        assert_eq!(escape_pipes("plain"), "plain");
    }

    #[test]
    fn test_trim_trailing_blanks() {
        let mut buf = "line\n  \t".to_string();
        trim_trailing_blanks(&mut buf);
        assert_eq!(buf, "line\n");
    }
}
