//! Content Normalizer — turns fetched markup or pasted text into a compact,
//! model-sized string.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::models::{ContentMode, TRUNCATION_MARKER};

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").expect("valid regex"));
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b.*?</style\s*>").expect("valid regex"));
static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Cleans `raw` for the given mode and caps it at `max_length` characters
/// (plus the truncation marker).
///
/// Same input and `max_length` always produce the same output.
pub fn normalize(raw: &str, mode: ContentMode, max_length: usize) -> String {
    let collapsed = match mode {
        ContentMode::Html => collapse_whitespace(&strip_markup_noise(raw)),
        ContentMode::Text => collapse_whitespace(raw),
    };
    truncate_at_boundary(collapsed, max_length)
}

/// Removes `<script>`, `<style>` and `<!-- -->` blocks. Other tags stay; the
/// model reads them fine and they carry structure.
fn strip_markup_noise(html: &str) -> String {
    let html = SCRIPT_BLOCK.replace_all(html, "");
    let html = STYLE_BLOCK.replace_all(&html, "");
    HTML_COMMENT.replace_all(&html, "").into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Cuts after the last `.` or at the last space inside the first `max_length`
/// characters, whichever comes later. Without either, the prefix is kept whole.
fn truncate_at_boundary(text: String, max_length: usize) -> String {
    let limit = text.char_indices().nth(max_length).map(|(i, _)| i);
    let Some(limit) = limit else {
        return text;
    };
    let prefix = &text[..limit];

    let cut = match (prefix.rfind('.'), prefix.rfind(' ')) {
        (Some(period), Some(space)) if period > space => period + 1,
        (Some(period), None) => period + 1,
        (_, Some(space)) => space,
        (None, None) => limit,
    };

    let mut truncated = String::with_capacity(cut + TRUNCATION_MARKER.len());
    truncated.push_str(&prefix[..cut]);
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}
