// File: src/components/checkbox_group.rs
// Purpose: Multi-select checkbox list over a list-shaped field

use maud::{html, Markup};

use crate::form::FieldBinding;

/// One selectable entry of a [`CheckboxGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxOption {
    pub value: String,
    pub label: String,
}

impl CheckboxOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Compute the next selection after toggling `option`.
///
/// Checking appends to the end; unchecking removes every occurrence. The
/// caller feeds the result back through the container's change handler, which
/// replaces the list wholesale.
pub fn toggle(selected: &[String], option: &str, checked: bool) -> Vec<String> {
    if checked {
        let mut next = selected.to_vec();
        next.push(option.to_string());
        next
    } else {
        selected
            .iter()
            .filter(|value| value.as_str() != option)
            .cloned()
            .collect()
    }
}

/// A group of checkboxes bound to one list-shaped field.
///
/// Membership in the bound list drives each box's checked state. The inline
/// error line follows the same visibility policy as every field: shown only
/// once the field is touched.
#[derive(Debug, Clone)]
pub struct CheckboxGroup {
    name: String,
    label: Option<String>,
    options: Vec<CheckboxOption>,
}

impl CheckboxGroup {
    pub fn new(name: &str, options: Vec<CheckboxOption>) -> Self {
        Self {
            name: name.to_string(),
            label: None,
            options,
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn render(&self, binding: &FieldBinding<'_>) -> Markup {
        let selected = binding.value.as_list().unwrap_or(&[]);
        let visible_error = binding.visible_error();

        html! {
            div class="form-validator-field-container" style=[binding.style] {
                @if let Some(label) = &self.label {
                    span class="form-validator-label" { (label) }
                }
                div class="checkbox-group" data-name=(self.name) {
                    @for option in &self.options {
                        label class="checkbox-label" {
                            input
                                type="checkbox"
                                name=(self.name)
                                value=(option.value)
                                checked[selected.contains(&option.value)];
                            (option.label)
                        }
                    }
                }
                @if let Some(message) = visible_error {
                    div class="error-message" role="alert" {
                        (message)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldKind, FormValidator};
    use formkit_validation::ValidationRule;

    fn selection(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_toggle_checking_appends() {
        assert_eq!(toggle(&[], "a", true), selection(&["a"]));
        assert_eq!(toggle(&selection(&["y"]), "x", true), selection(&["y", "x"]));
    }

    #[test]
    fn test_toggle_unchecking_removes_all_occurrences() {
        assert_eq!(toggle(&selection(&["a", "b", "a"]), "a", false), selection(&["b"]));
        assert_eq!(toggle(&selection(&["a"]), "missing", false), selection(&["a"]));
    }

    fn group_form() -> FormValidator {
        FormValidator::builder()
            .field(
                "interests",
                FieldKind::CheckboxGroup,
                ValidationRule::new().required().checkbox_group().min_selected(2),
            )
            .on_submit(|_| {})
            .build()
            .unwrap()
    }

    fn group() -> CheckboxGroup {
        CheckboxGroup::new(
            "interests",
            vec![
                CheckboxOption::new("rust", "Rust"),
                CheckboxOption::new("zig", "Zig"),
            ],
        )
        .label("Interests")
    }

    #[test]
    fn test_renders_options_with_membership() {
        let mut form = group_form();
        form.handle_change("interests", vec!["rust"]);

        let markup = group().render(&form.binding("interests")).into_string();
        assert!(markup.contains("checkbox-group"));
        assert!(markup.contains("value=\"rust\" checked"));
        assert!(!markup.contains("value=\"zig\" checked"));
        assert!(markup.contains("Interests"));
    }

    #[test]
    fn test_inline_error_gated_by_touched() {
        let mut form = group_form();
        // group changes validate synchronously, so the error exists already
        form.handle_change("interests", vec!["rust"]);
        assert!(form.error("interests").is_some());

        let markup = group().render(&form.binding("interests")).into_string();
        assert!(!markup.contains("role=\"alert\""));

        form.handle_blur("interests");
        let markup = group().render(&form.binding("interests")).into_string();
        assert!(markup.contains("role=\"alert\""));
        assert!(markup.contains("Please select at least 2 options"));
    }
}
