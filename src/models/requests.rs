use crate::models::domain::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request to predict a sale price: the raw web-form fields, keyed by their
/// human-readable labels. Field order in the JSON object is irrelevant; the
/// normalizer selects fields by name into the fixed training-time orders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictRequest {
    pub fields: HashMap<String, FieldValue>,
}

impl PredictRequest {
    /// Look up a form field by its label
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Set a form field, replacing any previous value
    pub fn set(&mut self, key: &str, value: FieldValue) -> &mut Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Remove a form field, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }
}
