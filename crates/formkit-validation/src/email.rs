// File: src/email.rs
// Purpose: Email shape validation

use once_cell::sync::Lazy;
use regex::Regex;

// One non-space local part, one @, a dotted domain
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
