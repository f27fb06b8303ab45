// File: src/rule.rs
// Purpose: Per-field rule set, builder methods, and message overrides

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::value::{FieldValue, FormValues};

/// The rule-set collection for a whole form, keyed by field name.
pub type RuleMap = BTreeMap<String, ValidationRule>;

/// A consumer-supplied cross-field check, invoked last when every built-in
/// rule has passed. Receives the field's value and all current values; its
/// return value is the final result for the field.
pub type CustomRule = Arc<dyn Fn(&FieldValue, &FormValues) -> Option<String> + Send + Sync>;

/// Per-rule message overrides. A `None` entry falls back to the default
/// message in [`crate::messages`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Messages {
    pub required: Option<String>,
    pub email: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub pattern: Option<String>,
    pub complexity: Option<String>,
    pub number: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub url: Option<String>,
    pub tel: Option<String>,
    pub date: Option<String>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub min_selected: Option<String>,
    pub max_selected: Option<String>,
}

/// The immutable validation configuration for one field.
///
/// Built once at form construction and never mutated by the container.
/// The `pattern` rule takes a pre-compiled [`Regex`], so a malformed pattern
/// is a compile error in the consumer's own code, not a runtime condition the
/// evaluator has to recover from.
///
/// # Example
///
/// ```rust,ignore
/// use formkit_validation::ValidationRule;
///
/// let email = ValidationRule::new().required().email();
/// let password = ValidationRule::new().required().min_length(8).complexity();
/// let age = ValidationRule::new().number().min(18.0).max(120.0);
/// ```
#[derive(Clone, Default)]
pub struct ValidationRule {
    pub(crate) required: bool,
    pub(crate) email: bool,
    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) pattern: Option<Regex>,
    pub(crate) complexity: bool,
    pub(crate) number: bool,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) url: bool,
    pub(crate) tel: bool,
    pub(crate) date: bool,
    pub(crate) min_date: Option<String>,
    pub(crate) max_date: Option<String>,
    pub(crate) checkbox_group: bool,
    pub(crate) min_selected: Option<usize>,
    pub(crate) max_selected: Option<usize>,
    pub(crate) radio_group: bool,
    pub(crate) select: bool,
    pub(crate) custom: Option<CustomRule>,
    pub(crate) messages: Messages,
}

impl ValidationRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn complexity(mut self) -> Self {
        self.complexity = true;
        self
    }

    pub fn number(mut self) -> Self {
        self.number = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn url(mut self) -> Self {
        self.url = true;
        self
    }

    pub fn tel(mut self) -> Self {
        self.tel = true;
        self
    }

    pub fn date(mut self) -> Self {
        self.date = true;
        self
    }

    pub fn min_date(mut self, date: &str) -> Self {
        self.min_date = Some(date.to_string());
        self
    }

    pub fn max_date(mut self, date: &str) -> Self {
        self.max_date = Some(date.to_string());
        self
    }

    pub fn checkbox_group(mut self) -> Self {
        self.checkbox_group = true;
        self
    }

    pub fn min_selected(mut self, min: usize) -> Self {
        self.min_selected = Some(min);
        self
    }

    pub fn max_selected(mut self, max: usize) -> Self {
        self.max_selected = Some(max);
        self
    }

    pub fn radio_group(mut self) -> Self {
        self.radio_group = true;
        self
    }

    pub fn select(mut self) -> Self {
        self.select = true;
        self
    }

    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&FieldValue, &FormValues) -> Option<String> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(check));
        self
    }

    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Override the message of a single rule without replacing the whole map.
    pub fn required_message(mut self, message: &str) -> Self {
        self.messages.required = Some(message.to_string());
        self
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("email", &self.email)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.as_ref().map(|re| re.as_str()))
            .field("complexity", &self.complexity)
            .field("number", &self.number)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("url", &self.url)
            .field("tel", &self.tel)
            .field("date", &self.date)
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .field("checkbox_group", &self.checkbox_group)
            .field("min_selected", &self.min_selected)
            .field("max_selected", &self.max_selected)
            .field("radio_group", &self.radio_group)
            .field("select", &self.select)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_rules() {
        let rule = ValidationRule::new()
            .required()
            .min_length(3)
            .max_length(30)
            .pattern(Regex::new(r"^[a-z]+$").unwrap());

        assert!(rule.required);
        assert_eq!(rule.min_length, Some(3));
        assert_eq!(rule.max_length, Some(30));
        assert!(rule.pattern.is_some());
    }

    #[test]
    fn test_message_overrides_deserialize_camel_case() {
        let messages: Messages =
            serde_json::from_str(r#"{"required": "Need this", "minLength": "Too short"}"#).unwrap();
        assert_eq!(messages.required.as_deref(), Some("Need this"));
        assert_eq!(messages.min_length.as_deref(), Some("Too short"));
        assert!(messages.email.is_none());
    }
}
