// File: src/datetime.rs
// Purpose: Date parsing and date-bound validation

use chrono::NaiveDate;

/// Parse an ISO `YYYY-MM-DD` date string
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Date bound checks; an unparseable bound never constrains the value
pub fn on_or_after(value: NaiveDate, min: &str) -> bool {
    match parse_date(min) {
        Some(min) => value >= min,
        None => true,
    }
}

pub fn on_or_before(value: NaiveDate, max: &str) -> bool {
    match parse_date(max) {
        Some(max) => value <= max,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-06-15").is_some());
        assert!(parse_date(" 2024-06-15 ").is_some());

        assert!(parse_date("15/06/2024").is_none());
        assert!(parse_date("2024-13-01").is_none());
        assert!(parse_date("not-a-date").is_none());
    }

    #[test]
    fn test_date_bounds() {
        let date = parse_date("2024-06-15").unwrap();

        assert!(on_or_after(date, "2024-01-01"));
        assert!(on_or_after(date, "2024-06-15"));
        assert!(!on_or_after(date, "2024-07-01"));

        assert!(on_or_before(date, "2024-12-31"));
        assert!(!on_or_before(date, "2024-06-14"));
    }

    #[test]
    fn test_unparseable_bound_never_constrains() {
        let date = parse_date("2024-06-15").unwrap();
        assert!(on_or_after(date, "garbage"));
        assert!(on_or_before(date, "garbage"));
    }
}
