// File: src/components/mod.rs
// Purpose: Presentational field components

pub mod checkbox_group;
pub mod form_field;

pub use checkbox_group::{toggle, CheckboxGroup, CheckboxOption};
pub use form_field::FormField;
