//! Anchor slug generation and table-of-contents links.

use regex::Regex;
use std::sync::LazyLock;

// Capitalized word after anything but a hyphen: `getUser` -> `get-User`
static RE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^-])([A-Z][a-z]+)").unwrap());

// Lowercase or digit followed by uppercase: `userID` -> `user-ID`
static RE_HUMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Convert a camel-case identifier to a kebab-case anchor slug.
///
/// `fetchHTTPResponse` → `fetch-http-response`
pub fn camel_to_kebab(s: &str) -> String {
    let words = RE_WORD.replace_all(s, "$1-$2");
    RE_HUMP.replace_all(&words, "$1-$2").to_lowercase()
}

/// Generate a table-of-contents list item linking to `name`'s anchor.
pub fn render_toc_item(name: &str) -> String {
    format!("* <a href=\"#{}\">{}</a>", camel_to_kebab(name), name)
}

/// Generate the anchor target for `name`.
pub fn render_anchor(name: &str) -> String {
    format!("<a name=\"{}\"/>", camel_to_kebab(name))
}
