//! User information extraction

use regex::Regex;
use std::sync::LazyLock;

/// Two to four consecutive capitalized words
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\s)([A-Z][A-Za-z&'.\-]*(\s|$)){2,4}")
        .unwrap_or_else(|e| panic!("invalid name pattern: {e}"))
});

/// First run of 2–4 capitalized words in `text`, or an empty string
pub fn extract_name(text: &str) -> String {
    NAME_PATTERN
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
