//! Comment block extraction and line splitting.
//!
//! A block runs from `**` to the first `) {` after it, so the declaration
//! the comment documents ends up as the block's last line.

use regex::Regex;
use std::sync::LazyLock;

/// Separator between logical lines of a normalized block.
pub const DELIMITER: char = '\n';

static RE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*\*(.*?)\) \{").unwrap());

static RE_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*/").unwrap());

// Horizontal whitespace and `*` line-prefix markers
static RE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t*]+").unwrap());

static RE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").unwrap());

/// Yield every documented block in `text`, normalized and trimmed.
pub fn comments(text: &str) -> impl Iterator<Item = String> + '_ {
    RE_BLOCK
        .captures_iter(text)
        .map(|caps| normalize(&caps[1]))
}

fn normalize(raw: &str) -> String {
    // `*/` gets its own line so a one-line `/** text */` keeps clean prose
    let split = RE_TERMINATOR.replace_all(raw, "\n");
    let spaced = RE_PREFIX.replace_all(&split, " ");
    let delimiter = DELIMITER.to_string();
    RE_BREAKS
        .replace_all(spaced.trim(), delimiter.as_str())
        .into_owned()
}

/// Split a normalized block into trimmed, non-empty logical lines.
pub fn split_lines(comment: &str) -> Vec<String> {
    comment
        .split(DELIMITER)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
