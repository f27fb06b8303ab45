// File: src/string.rs
// Purpose: String-shape validators (length, pattern, url, tel, placeholder)

use once_cell::sync::Lazy;
use regex::Regex;

// URL must carry an explicit http/https scheme and a non-empty host
static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

// Loose international phone shape: optional leading +, then digits with
// common separators, 7 digits minimum
static TEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\(?[0-9][0-9\s().-]{5,17}[0-9]$").unwrap());

/// Select placeholder sentinels that count as "nothing chosen"
const PLACEHOLDER_SENTINELS: &[&str] = &["default", "placeholder"];

pub fn meets_min_length(s: &str, min: usize) -> bool {
    s.chars().count() >= min
}

pub fn meets_max_length(s: &str, max: usize) -> bool {
    s.chars().count() <= max
}

pub fn matches_pattern(s: &str, pattern: &Regex) -> bool {
    pattern.is_match(s)
}

/// Validate URL format (absolute, scheme required)
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

/// Validate a loose international phone number
pub fn is_valid_tel(tel: &str) -> bool {
    TEL_REGEX.is_match(tel)
}

/// Check whether a select value is a placeholder sentinel
pub fn is_placeholder_choice(value: &str) -> bool {
    PLACEHOLDER_SENTINELS.contains(&value)
}
