use once_cell::sync::Lazy;
use regex::Regex;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize free text for fuzzy comparison: lowercase, collapse whitespace
/// runs to a single space, drop literal parentheses, trim. Total over any
/// input, including the empty string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let collapsed = RE_WHITESPACE.replace_all(&lowered, " ");
    collapsed.replace(['(', ')'], "").trim().to_string()
}
