// File: src/messages.rs
// Purpose: Default error messages for every built-in rule

pub const REQUIRED: &str = "This field is required";
pub const EMAIL: &str = "Please enter a valid email address";
pub const PATTERN: &str = "Invalid format";
pub const COMPLEXITY: &str =
    "Password must contain at least 1 uppercase, 1 lowercase, 1 number, and 1 special character";
pub const NUMBER: &str = "Please enter a valid number";
pub const URL: &str = "Please enter a valid URL (include http:// or https://)";
pub const TEL: &str = "Please enter a valid phone number";
pub const DATE: &str = "Please enter a valid date";
pub const GROUP_REQUIRED: &str = "Please select at least one option";
pub const CHOICE_REQUIRED: &str = "Please select an option";

pub fn min_length(n: usize) -> String {
    format!("Must be at least {} characters", n)
}

pub fn max_length(n: usize) -> String {
    format!("Must be no more than {} characters", n)
}

pub fn min(n: f64) -> String {
    format!("Must be at least {}", n)
}

pub fn max(n: f64) -> String {
    format!("Must be no more than {}", n)
}

pub fn min_date(date: &str) -> String {
    format!("Date must be after {}", date)
}

pub fn max_date(date: &str) -> String {
    format!("Date must be before {}", date)
}

pub fn min_selected(n: usize) -> String {
    format!("Please select at least {} options", n)
}

pub fn max_selected(n: usize) -> String {
    format!("Please select no more than {} options", n)
}
