//! Formkit Validation Core
//!
//! Pure validation functions and the ordered rule evaluator used by the
//! formkit form container. Every function here is deterministic and free of
//! side effects: a field value and a rule set go in, an optional error
//! message comes out.

pub mod collection;
pub mod datetime;
pub mod email;
pub mod evaluate;
pub mod messages;
pub mod numeric;
pub mod password;
pub mod rule;
pub mod string;
pub mod value;

// Re-export the evaluator surface
pub use evaluate::{validate_field, validate_form};
pub use rule::{CustomRule, Messages, RuleMap, ValidationRule};
pub use value::{FieldValue, FormValues};
