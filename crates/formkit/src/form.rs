// File: src/form.rs
// Purpose: Field state container: values/errors/touched reconciliation and submit gating

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use maud::{html, Markup};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use formkit_validation::{
    validate_field, validate_form, FieldValue, FormValues, RuleMap, ValidationRule,
};

use crate::debounce::Debouncer;
use crate::theme::Theme;

/// Quiet period applied to change-triggered validation unless configured.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Reserved key in the custom-styles map for the form element itself.
pub const FORM_STYLE_KEY: &str = "form";

static UNSET: FieldValue = FieldValue::Unset;

/// Declared variant of a field, supplied next to its rule set.
///
/// The container dispatches kind-specific behavior (the wholesale list
/// replacement of a checkbox group) by this declaration, never by inspecting
/// rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Checkbox,
    CheckboxGroup,
    RadioGroup,
    Select,
}

/// Callback invoked with the current values when a submit passes validation.
pub type SubmitHandler = Box<dyn FnMut(&FormValues)>;

#[derive(Debug, Error)]
pub enum FormBuilderError {
    #[error("a form needs at least one field with validation rules")]
    NoFields,
    #[error("an on_submit handler is required")]
    MissingSubmitHandler,
}

/// The tuple handed to `on_submit` consumers and snapshot inspection.
#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
    pub values: FormValues,
    pub errors: BTreeMap<String, String>,
    pub touched: BTreeMap<String, bool>,
}

/// Everything a field component needs, computed by the container.
///
/// This is the explicit registry lookup that replaces opaque child
/// decoration: a component declares a `name` and binds to the state the
/// container computed for it.
#[derive(Debug)]
pub struct FieldBinding<'a> {
    pub name: &'a str,
    pub value: &'a FieldValue,
    /// Checked flag when the current value is boolean (single checkbox).
    pub checked: Option<bool>,
    pub error: Option<&'a str>,
    pub touched: bool,
    /// State class token: `form-validator-field`, plus `error` or
    /// `form-validator-success` once touched state allows it.
    pub class: String,
    /// Per-field style override from the form's custom styles.
    pub style: Option<&'a str>,
    /// Theme marker for a `data-theme` attribute.
    pub theme: &'a str,
}

impl<'a> FieldBinding<'a> {
    /// The error gated by the visibility policy: touched fields only.
    pub fn visible_error(&self) -> Option<&'a str> {
        if self.touched {
            self.error
        } else {
            None
        }
    }

    pub fn is_success(&self) -> bool {
        self.touched && self.error.is_none()
    }
}

/// Builder for [`FormValidator`]; `field` and `on_submit` are required.
pub struct FormBuilder {
    rules: RuleMap,
    kinds: BTreeMap<String, FieldKind>,
    initial: FormValues,
    theme: Theme,
    styles: BTreeMap<String, String>,
    enable_debounce: bool,
    debounce_delay: Duration,
    on_submit: Option<SubmitHandler>,
}

impl FormBuilder {
    fn new() -> Self {
        Self {
            rules: RuleMap::new(),
            kinds: BTreeMap::new(),
            initial: FormValues::new(),
            theme: Theme::default(),
            styles: BTreeMap::new(),
            enable_debounce: true,
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
            on_submit: None,
        }
    }

    /// Declare one field: its name, kind, and validation rule set.
    pub fn field(mut self, name: &str, kind: FieldKind, rule: ValidationRule) -> Self {
        self.rules.insert(name.to_string(), rule);
        self.kinds.insert(name.to_string(), kind);
        self
    }

    /// Seed a value before mount.
    pub fn initial(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.initial.insert(name.to_string(), value.into());
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Inline style override for one field, or for the form itself under
    /// [`FORM_STYLE_KEY`].
    pub fn style(mut self, name: &str, css: &str) -> Self {
        self.styles.insert(name.to_string(), css.to_string());
        self
    }

    /// Inline style for the form element.
    pub fn form_style(self, css: &str) -> Self {
        self.style(FORM_STYLE_KEY, css)
    }

    pub fn enable_debounce(mut self, enabled: bool) -> Self {
        self.enable_debounce = enabled;
        self
    }

    pub fn debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    pub fn on_submit<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&FormValues) + 'static,
    {
        self.on_submit = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> Result<FormValidator, FormBuilderError> {
        if self.rules.is_empty() {
            return Err(FormBuilderError::NoFields);
        }
        let on_submit = self.on_submit.ok_or(FormBuilderError::MissingSubmitHandler)?;

        Ok(FormValidator {
            rules: self.rules,
            kinds: self.kinds,
            values: self.initial,
            errors: BTreeMap::new(),
            touched: BTreeMap::new(),
            theme: self.theme,
            styles: self.styles,
            enable_debounce: self.enable_debounce,
            debouncer: Debouncer::new(self.debounce_delay),
            on_submit,
        })
    }
}

/// Orchestrates per-field values, errors, and touched state for a set of
/// declared fields.
///
/// The hosting framework routes input events to [`handle_change`],
/// [`handle_blur`], and [`handle_submit`], pumps [`tick`] from its event
/// loop, and reads per-field state back through [`binding`]. All state
/// transitions happen synchronously inside these calls; the debouncer's
/// pending slot is the only deferred work.
///
/// [`handle_change`]: FormValidator::handle_change
/// [`handle_blur`]: FormValidator::handle_blur
/// [`handle_submit`]: FormValidator::handle_submit
/// [`tick`]: FormValidator::tick
/// [`binding`]: FormValidator::binding
pub struct FormValidator {
    rules: RuleMap,
    kinds: BTreeMap<String, FieldKind>,
    values: FormValues,
    errors: BTreeMap<String, String>,
    touched: BTreeMap<String, bool>,
    theme: Theme,
    styles: BTreeMap<String, String>,
    enable_debounce: bool,
    debouncer: Debouncer<(String, FieldValue)>,
    on_submit: SubmitHandler,
}

impl std::fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("rules", &self.rules)
            .field("kinds", &self.kinds)
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("touched", &self.touched)
            .field("theme", &self.theme)
            .field("styles", &self.styles)
            .field("enable_debounce", &self.enable_debounce)
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}

impl FormValidator {
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    /// Store a new value for `name` and schedule or run its validation.
    ///
    /// Checkbox-group fields replace their list wholesale and validate
    /// synchronously; other kinds validate through the debouncer when it is
    /// enabled.
    pub fn handle_change(&mut self, name: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        if !self.rules.contains_key(name) {
            warn!(field = name, "change event for a field with no declared rules");
        }
        debug!(field = name, "change");
        self.values.insert(name.to_string(), value.clone());

        let is_group = matches!(self.kinds.get(name), Some(FieldKind::CheckboxGroup));
        if is_group || !self.enable_debounce {
            self.validate_one(name);
        } else {
            self.debouncer.call((name.to_string(), value));
        }
    }

    /// Mark `name` touched and validate it immediately, bypassing the
    /// debouncer.
    pub fn handle_blur(&mut self, name: &str) {
        debug!(field = name, "blur");
        self.touched.insert(name.to_string(), true);
        self.validate_one(name);
    }

    /// Full-form validation pass. Replaces the whole error map, marks every
    /// declared field touched, and invokes the submit handler with the
    /// current values iff no field failed. Returns whether the handler ran.
    pub fn handle_submit(&mut self) -> bool {
        self.errors = validate_form(&self.values, &self.rules);
        for name in self.rules.keys() {
            self.touched.insert(name.clone(), true);
        }

        if self.errors.is_empty() {
            debug!("submit accepted");
            (self.on_submit)(&self.values);
            true
        } else {
            debug!(errors = self.errors.len(), "submit blocked by validation errors");
            false
        }
    }

    /// Pump the debouncer; applies the pending trailing validation when its
    /// quiet period has elapsed.
    pub fn tick(&mut self) {
        if let Some((name, value)) = self.debouncer.poll() {
            self.apply_pending(name, value);
        }
    }

    pub fn tick_at(&mut self, now: Instant) {
        if let Some((name, value)) = self.debouncer.poll_at(now) {
            self.apply_pending(name, value);
        }
    }

    /// Abandon any pending debounced validation; the teardown path.
    pub fn abandon_pending(&mut self) {
        self.debouncer.cancel();
    }

    /// The registry lookup for one declared field: current value, checked
    /// flag, error, touched state, class token, style, and theme marker.
    pub fn binding<'a>(&'a self, name: &'a str) -> FieldBinding<'a> {
        let value = self.values.get(name).unwrap_or(&UNSET);
        let error = self
            .errors
            .get(name)
            .map(String::as_str)
            .filter(|message| !message.is_empty());
        let touched = self.touched.get(name).copied().unwrap_or(false);
        let is_success = touched && error.is_none();

        let mut class = String::from("form-validator-field");
        if error.is_some() {
            class.push_str(" error");
        }
        if is_success {
            class.push_str(" form-validator-success");
        }

        FieldBinding {
            name,
            value,
            checked: value.as_bool(),
            error,
            touched,
            class,
            style: self.styles.get(name).map(String::as_str),
            theme: self.theme.name(),
        }
    }

    /// Errors gated by the visibility policy: touched fields with a
    /// non-empty message only.
    pub fn visible_errors(&self) -> BTreeMap<&str, &str> {
        self.errors
            .iter()
            .filter(|(name, message)| {
                !message.is_empty() && self.touched.get(*name).copied().unwrap_or(false)
            })
            .map(|(name, message)| (name.as_str(), message.as_str()))
            .collect()
    }

    /// Wrap already-rendered children in the `<form>` element with the theme
    /// class and the error-summary block for currently visible errors.
    pub fn render(&self, children: Markup) -> Markup {
        let visible = self.visible_errors();
        let form_style = self.form_style();

        html! {
            form class=(self.theme.form_class()) data-theme=(self.theme.name()) style=[form_style] novalidate {
                (children)

                @if !visible.is_empty() {
                    div class="error-summary" {
                        @for (_, message) in &visible {
                            div class="form-validator-error-message" { (message) }
                        }
                    }
                }
            }
        }
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.get(name).copied().unwrap_or(false)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Whether a full evaluation of the current values would pass; does not
    /// touch recorded state.
    pub fn is_valid(&self) -> bool {
        validate_form(&self.values, &self.rules).is_empty()
    }

    pub fn has_pending_validation(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values.clone(),
            errors: self.errors.clone(),
            touched: self.touched.clone(),
        }
    }

    fn validate_one(&mut self, name: &str) {
        let message = validate_field(
            self.values.get(name).unwrap_or(&UNSET),
            self.rules.get(name),
            Some(&self.values),
        );
        self.set_error(name, message);
    }

    fn apply_pending(&mut self, name: String, value: FieldValue) {
        let message = validate_field(&value, self.rules.get(&name), Some(&self.values));
        self.set_error(&name, message);
    }

    fn set_error(&mut self, name: &str, message: Option<String>) {
        match message {
            Some(message) if !message.is_empty() => {
                self.errors.insert(name.to_string(), message);
            }
            _ => {
                self.errors.remove(name);
            }
        }
    }

    fn form_style(&self) -> Option<String> {
        let theme_style = self.theme.inline_style();
        let custom = self.styles.get(FORM_STYLE_KEY).cloned();
        match (theme_style, custom) {
            (Some(theme), Some(custom)) => Some(format!("{} {}", theme, custom)),
            (Some(theme), None) => Some(theme),
            (None, Some(custom)) => Some(custom),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_submit() -> impl FnMut(&FormValues) + 'static {
        |_values| {}
    }

    #[test]
    fn test_builder_requires_fields_and_handler() {
        let err = FormValidator::builder()
            .on_submit(noop_submit())
            .build()
            .unwrap_err();
        assert!(matches!(err, FormBuilderError::NoFields));

        let err = FormValidator::builder()
            .field("name", FieldKind::Text, ValidationRule::new().required())
            .build()
            .unwrap_err();
        assert!(matches!(err, FormBuilderError::MissingSubmitHandler));
    }

    #[test]
    fn test_initial_values_are_seeded() {
        let form = FormValidator::builder()
            .field("name", FieldKind::Text, ValidationRule::new().required())
            .initial("name", "prefilled")
            .on_submit(noop_submit())
            .build()
            .unwrap();

        assert_eq!(form.value("name"), Some(&FieldValue::from("prefilled")));
        assert!(form.errors().is_empty());
        assert!(!form.is_touched("name"));
    }

    #[test]
    fn test_binding_for_untouched_field() {
        let form = FormValidator::builder()
            .field("email", FieldKind::Text, ValidationRule::new().required())
            .on_submit(noop_submit())
            .build()
            .unwrap();

        let binding = form.binding("email");
        assert_eq!(binding.value, &FieldValue::Unset);
        assert_eq!(binding.error, None);
        assert_eq!(binding.visible_error(), None);
        assert!(!binding.is_success());
        assert_eq!(binding.class, "form-validator-field");
        assert_eq!(binding.theme, "light");
    }

    #[test]
    fn test_checkbox_binding_exposes_checked() {
        let mut form = FormValidator::builder()
            .field("accept", FieldKind::Checkbox, ValidationRule::new().required())
            .enable_debounce(false)
            .on_submit(noop_submit())
            .build()
            .unwrap();

        form.handle_change("accept", true);
        assert_eq!(form.binding("accept").checked, Some(true));
        assert_eq!(form.binding("accept").error, None);
    }

    #[test]
    fn test_error_class_token() {
        let mut form = FormValidator::builder()
            .field("email", FieldKind::Text, ValidationRule::new().required().email())
            .enable_debounce(false)
            .on_submit(noop_submit())
            .build()
            .unwrap();

        form.handle_change("email", "bad@");
        assert_eq!(form.binding("email").class, "form-validator-field error");

        form.handle_change("email", "good@example.com");
        form.handle_blur("email");
        assert_eq!(
            form.binding("email").class,
            "form-validator-field form-validator-success"
        );
    }

    #[test]
    fn test_undeclared_field_change_is_stored_but_not_validated() {
        let mut form = FormValidator::builder()
            .field("email", FieldKind::Text, ValidationRule::new().required())
            .enable_debounce(false)
            .on_submit(noop_submit())
            .build()
            .unwrap();

        form.handle_change("extra", "whatever");
        assert_eq!(form.value("extra"), Some(&FieldValue::from("whatever")));
        assert_eq!(form.error("extra"), None);
    }

    #[test]
    fn test_render_wraps_children_with_theme() {
        let form = FormValidator::builder()
            .field("email", FieldKind::Text, ValidationRule::new().required())
            .theme(Theme::Dark)
            .on_submit(noop_submit())
            .build()
            .unwrap();

        let markup = form.render(html! { p { "children here" } }).into_string();
        assert!(markup.contains("form-validator-theme-dark"));
        assert!(markup.contains("data-theme=\"dark\""));
        assert!(markup.contains("novalidate"));
        assert!(markup.contains("children here"));
        assert!(!markup.contains("error-summary"));
    }

    #[test]
    fn test_form_style_merges_with_custom_theme() {
        let mut properties = std::collections::BTreeMap::new();
        properties.insert("--form-accent".to_string(), "#369".to_string());

        let form = FormValidator::builder()
            .field("email", FieldKind::Text, ValidationRule::new().required())
            .theme(Theme::Custom(properties))
            .form_style("max-width: 30rem;")
            .on_submit(noop_submit())
            .build()
            .unwrap();

        let markup = form.render(html! {}).into_string();
        assert!(markup.contains("--form-accent: #369; max-width: 30rem;"));
    }

    #[test]
    fn test_render_shows_summary_only_for_visible_errors() {
        let mut form = FormValidator::builder()
            .field("email", FieldKind::Text, ValidationRule::new().required())
            .enable_debounce(false)
            .on_submit(noop_submit())
            .build()
            .unwrap();

        // invalid but untouched: no summary
        form.handle_change("email", "");
        let markup = form.render(html! {}).into_string();
        assert!(!markup.contains("error-summary"));

        form.handle_blur("email");
        let markup = form.render(html! {}).into_string();
        assert!(markup.contains("error-summary"));
        assert!(markup.contains("This field is required"));
    }
}
