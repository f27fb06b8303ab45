// File: src/numeric.rs
// Purpose: Numeric coercion and bounds validation

/// Coerce a string value to a number, `None` when it does not parse
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn meets_min(value: f64, min: f64) -> bool {
    value >= min
}

pub fn meets_max(value: f64, max: f64) -> bool {
    value <= max
}
