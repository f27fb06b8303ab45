// File: src/password.rs
// Purpose: Password complexity validation

/// Special characters the complexity rule accepts
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Complexity requires at least one uppercase letter, one lowercase letter,
/// one digit, and one special character.
pub fn has_complexity(password: &str) -> bool {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    has_uppercase && has_lowercase && has_digit && has_special
}
