// File: src/collection.rs
// Purpose: Selection-count validation for list-valued fields

pub fn meets_min_selected(items: &[String], min: usize) -> bool {
    items.len() >= min
}

pub fn meets_max_selected(items: &[String], max: usize) -> bool {
    items.len() <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selections(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_min_selected() {
        let items = selections(&["a", "b"]);
        assert!(meets_min_selected(&items, 1));
        assert!(meets_min_selected(&items, 2));
        assert!(!meets_min_selected(&items, 3));
    }

    #[test]
    fn test_max_selected() {
        let items = selections(&["a", "b", "c"]);
        assert!(meets_max_selected(&items, 3));
        assert!(!meets_max_selected(&items, 2));
    }
}
