// File: src/evaluate.rs
// Purpose: Ordered single-field and whole-form rule evaluation

use std::collections::BTreeMap;

use crate::collection;
use crate::datetime;
use crate::email;
use crate::messages;
use crate::numeric;
use crate::password;
use crate::rule::{RuleMap, ValidationRule};
use crate::string;
use crate::value::{FieldValue, FormValues};

/// Validate one field value against its rule set.
///
/// Rules are checked in a fixed priority order and evaluation stops at the
/// first failing rule, so at most one message is produced per pass:
/// required, then (for non-empty values) min/max length, pattern, email,
/// complexity, number with min/max bounds, url, tel, date with date bounds,
/// checkbox-group selection counts, select placeholder, and finally `custom`.
/// When every built-in rule passes and a `custom` check is present, its
/// result — including `None` — is final.
///
/// `all_values` is the cross-field context handed to `custom` checks.
/// No rule set means no error.
pub fn validate_field(
    value: &FieldValue,
    rules: Option<&ValidationRule>,
    all_values: Option<&FormValues>,
) -> Option<String> {
    let rules = rules?;
    let messages = &rules.messages;

    // required: emptiness is shape-dependent; choice-style fields carry
    // their own default wording
    if rules.required && value.is_empty() {
        let default = if rules.checkbox_group {
            messages::GROUP_REQUIRED
        } else if rules.radio_group || rules.select {
            messages::CHOICE_REQUIRED
        } else {
            messages::REQUIRED
        };
        return Some(override_or(&messages.required, default));
    }

    // empty optional fields skip every remaining rule
    if value.is_empty() {
        return None;
    }

    if let Some(text) = value.as_text() {
        if let Some(min) = rules.min_length {
            if !string::meets_min_length(text, min) {
                return Some(override_or(&messages.min_length, &messages::min_length(min)));
            }
        }

        if let Some(max) = rules.max_length {
            if !string::meets_max_length(text, max) {
                return Some(override_or(&messages.max_length, &messages::max_length(max)));
            }
        }

        if let Some(pattern) = &rules.pattern {
            if !string::matches_pattern(text, pattern) {
                return Some(override_or(&messages.pattern, messages::PATTERN));
            }
        }

        if rules.email && !email::is_valid_email(text) {
            return Some(override_or(&messages.email, messages::EMAIL));
        }

        if rules.complexity && !password::has_complexity(text) {
            return Some(override_or(&messages.complexity, messages::COMPLEXITY));
        }

        if rules.number {
            match numeric::parse_number(text) {
                None => return Some(override_or(&messages.number, messages::NUMBER)),
                Some(n) => {
                    if let Some(min) = rules.min {
                        if !numeric::meets_min(n, min) {
                            return Some(override_or(&messages.min, &messages::min(min)));
                        }
                    }
                    if let Some(max) = rules.max {
                        if !numeric::meets_max(n, max) {
                            return Some(override_or(&messages.max, &messages::max(max)));
                        }
                    }
                }
            }
        }

        if rules.url && !string::is_valid_url(text) {
            return Some(override_or(&messages.url, messages::URL));
        }

        if rules.tel && !string::is_valid_tel(text) {
            return Some(override_or(&messages.tel, messages::TEL));
        }

        if rules.date {
            match datetime::parse_date(text) {
                None => return Some(override_or(&messages.date, messages::DATE)),
                Some(date) => {
                    if let Some(min) = &rules.min_date {
                        if !datetime::on_or_after(date, min) {
                            return Some(override_or(&messages.min_date, &messages::min_date(min)));
                        }
                    }
                    if let Some(max) = &rules.max_date {
                        if !datetime::on_or_before(date, max) {
                            return Some(override_or(&messages.max_date, &messages::max_date(max)));
                        }
                    }
                }
            }
        }

        if rules.select && rules.required && string::is_placeholder_choice(text) {
            return Some(override_or(&messages.required, messages::CHOICE_REQUIRED));
        }
    }

    if rules.checkbox_group {
        let selected = value.as_list().unwrap_or(&[]);
        if let Some(min) = rules.min_selected {
            if !collection::meets_min_selected(selected, min) {
                return Some(override_or(&messages.min_selected, &messages::min_selected(min)));
            }
        }
        if let Some(max) = rules.max_selected {
            if !collection::meets_max_selected(selected, max) {
                return Some(override_or(&messages.max_selected, &messages::max_selected(max)));
            }
        }
    }

    // custom is the final check; once reached, its result is authoritative
    if let Some(custom) = &rules.custom {
        let empty = FormValues::new();
        let context = all_values.unwrap_or(&empty);
        return custom(value, context);
    }

    None
}

/// Validate every field declared in `rules`, returning a map of field name to
/// message for the fields that failed. Fields present in `values` but absent
/// from `rules` are never validated.
pub fn validate_form(values: &FormValues, rules: &RuleMap) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    let unset = FieldValue::Unset;

    for (name, rule) in rules {
        let value = values.get(name).unwrap_or(&unset);
        if let Some(message) = validate_field(value, Some(rule), Some(values)) {
            if !message.is_empty() {
                errors.insert(name.clone(), message);
            }
        }
    }

    errors
}

fn override_or(message: &Option<String>, default: &str) -> String {
    message.clone().unwrap_or_else(|| default.to_string())
}
