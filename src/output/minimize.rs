//! Content minimization
//!
//! Shrinks a crawled corpus before it is cached and served. Steps run in a
//! fixed order: code blocks, square brackets, parentheses, whitespace, trim.

#![allow(clippy::expect_used)]

use crate::config::MinimizeOptions;
use regex::Regex;
use std::sync::LazyLock;

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("FENCED_CODE regex"));

static SQUARE_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("SQUARE_BRACKETS regex"));

static PARENTHESES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("PARENTHESES regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

/// Applies the enabled minimization steps to `content`
///
/// Bracket and parenthesis removal do not span lines.
///
/// # Example
///
/// ```
/// use doc_harvest::config::MinimizeOptions;
/// use doc_harvest::output::minimize;
///
/// let options = MinimizeOptions {
///     normalize_whitespace: true,
///     trim: true,
///     ..Default::default()
/// };
/// assert_eq!(minimize("  a\n\n  b ", &options), "a b");
/// ```
pub fn minimize(content: &str, options: &MinimizeOptions) -> String {
    let mut text = content.to_string();

    if options.remove_code_blocks {
        text = FENCED_CODE.replace_all(&text, "").into_owned();
    }
    if options.remove_square_brackets {
        text = SQUARE_BRACKETS.replace_all(&text, "").into_owned();
    }
    if options.remove_parentheses {
        text = PARENTHESES.replace_all(&text, "").into_owned();
    }
    if options.normalize_whitespace {
        text = WHITESPACE.replace_all(&text, " ").into_owned();
    }
    if options.trim {
        text = text.trim().to_string();
    }

    text
}
