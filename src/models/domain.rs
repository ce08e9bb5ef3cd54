use serde::{Deserialize, Serialize};

/// A single web-form field value
///
/// The form submits three kinds of values: checkbox booleans, select/text
/// tokens, and numeric entries. Numbers are kept as f64 so integer and
/// float entries deserialize through the same variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Helper to get the value as a number, if it is one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Helper to get the value as a string token, if it is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(_))
    }
}
