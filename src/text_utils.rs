use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

// @module: Subtitle text cleanup

// @const: Tag-like span, matched without validation. Literal '<' or '>' in
// dialogue can over-strip; known limitation of the format.
static MARKUP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

// @const: Any whitespace run, newlines included
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Clean raw subtitle text for display.
///
/// Unless `keep_markup` is set, removes `<...>` tag-like spans, then collapses
/// every whitespace run to a single space and trims. Returns an empty string
/// for input that is entirely markup or whitespace; callers drop such cues.
/// The function is idempotent.
pub fn clean_text(raw: &str, keep_markup: bool) -> String {
    let stripped: Cow<str> = if keep_markup {
        Cow::Borrowed(raw)
    } else {
        MARKUP_REGEX.replace_all(raw, "")
    };

    WHITESPACE_REGEX
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}
