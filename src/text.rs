//! Label shortening shared by both render adapters
//!
//! Lengths are counted in `char`s so a multi-byte label is never cut inside
//! a character.

use std::sync::OnceLock;

use regex::Regex;

/// Single-character ellipsis appended by [`truncate_label`].
pub const ELLIPSIS: char = '\u{2026}';

/// Trailing version token: minimal prefix ending in whitespace, a dotted
/// numeric version, then a suffix with no further digits. Digits are ASCII
/// only; `\d` in `regex` would also accept other scripts.
const VERSION_PATTERN: &str = r"^(.*?\s)([0-9]+(?:\.[0-9]+)*)[^0-9]*$";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

/// Shorten `text` to at most `max_chars` characters.
///
/// Text that already fits is returned unchanged; otherwise the first
/// `max_chars - 1` characters are kept and an ellipsis appended. A
/// `max_chars` below 1 is treated as 1.
#[must_use]
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    let max_chars = max_chars.max(1);
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Compact a release name for the marker label.
///
/// `"Growth Backend 2.3.1 rollout"` becomes `"Growth BE 2.3.1"`: anything
/// after the trailing version is dropped and `Backend` is abbreviated.
#[must_use]
pub fn compact_release_label(label: &str) -> String {
    let kept = version_regex()
        .captures(label)
        .map_or_else(
            || label.to_string(),
            |caps| format!("{}{}", &caps[1], &caps[2]),
        );
    kept.replace("Backend", "BE")
}

/// Escape text for SVG and HTML attribute or element content.
#[must_use]
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
