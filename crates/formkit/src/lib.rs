//! Formkit
//!
//! Stateful form validation for component-based Rust UIs: a field state
//! container with debounced validation, presentational field components, and
//! themed styling, on top of the pure rule evaluator in
//! [`formkit_validation`].
//!
//! # Example
//!
//! ```rust,ignore
//! use formkit::{FieldKind, FormField, FormValidator, ValidationRule};
//! use maud::html;
//!
//! let mut form = FormValidator::builder()
//!     .field("email", FieldKind::Text, ValidationRule::new().required().email())
//!     .on_submit(|values| println!("submitted: {:?}", values))
//!     .build()?;
//!
//! form.handle_change("email", "user@example.com");
//! form.handle_blur("email");
//!
//! let email = FormField::new("email", "Email").input_type("email");
//! let page = form.render(email.render(&form.binding("email")));
//! ```

pub mod components;
pub mod debounce;
pub mod form;
pub mod styles;
pub mod theme;

// The validation core, re-exported for consumers that only pull in formkit
pub use formkit_validation as validation;

pub use components::{toggle, CheckboxGroup, CheckboxOption, FormField};
pub use debounce::Debouncer;
pub use form::{
    FieldBinding, FieldKind, FormBuilder, FormBuilderError, FormSnapshot, FormValidator,
    SubmitHandler, DEFAULT_DEBOUNCE_DELAY, FORM_STYLE_KEY,
};
pub use theme::Theme;

pub use formkit_validation::{
    validate_field, validate_form, CustomRule, FieldValue, FormValues, Messages, RuleMap,
    ValidationRule,
};
