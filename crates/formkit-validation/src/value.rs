// File: src/value.rs
// Purpose: Tagged field value with per-shape emptiness semantics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// All values of a mounted form, keyed by field name.
///
/// A `BTreeMap` keeps iteration (and therefore serialized snapshots and the
/// rendered error summary) deterministically ordered.
pub type FormValues = BTreeMap<String, FieldValue>;

/// The current value of one form field.
///
/// The variant follows the field kind: scalar text for inputs and selects,
/// a flag for a single checkbox, an ordered list of option identifiers for a
/// checkbox group or multi-select. `Unset` is the state of a field the user
/// has never interacted with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Unset,
    Bool(bool),
    List(Vec<String>),
    Text(String),
}

impl FieldValue {
    /// Emptiness depends on the value's shape: unset, a whitespace-only
    /// string, an unchecked flag, and a zero-length list are all empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Unset => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Bool(b) => !b,
            FieldValue::List(items) => items.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(String::from).collect())
    }
}
