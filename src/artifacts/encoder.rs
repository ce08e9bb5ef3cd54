use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when applying a fitted encoder
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("category {token:?} for column {column} was not seen at fit time")]
    UnknownCategory { column: String, token: String },

    #[error("encoder schema mismatch: {0}")]
    SchemaMismatch(String),
}

/// What to do with a categorical token the encoder never saw at fit time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPolicy {
    /// Fail the prediction
    #[default]
    Reject,
    /// Emit an all-zero block for the affected column
    Ignore,
}

/// One categorical column's fitted vocabulary, in fit order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderColumn {
    pub name: String,
    pub categories: Vec<String>,
}

/// Fitted one-hot encoder
///
/// Holds the per-column category vocabularies recorded at training time.
/// Fitting is out of scope here; artifacts arrive already fitted and are
/// never mutated at inference time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneHotEncoder {
    pub columns: Vec<EncoderColumn>,
    #[serde(default)]
    pub unknown_policy: UnknownPolicy,
}

impl OneHotEncoder {
    /// Input column names in fit order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Canonical output column names, `{column}_{category}` in fit order
    pub fn feature_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .flat_map(|column| {
                column
                    .categories
                    .iter()
                    .map(move |category| format!("{}_{}", column.name, category))
            })
            .collect()
    }

    /// Width of the encoded vector
    pub fn output_width(&self) -> usize {
        self.columns.iter().map(|c| c.categories.len()).sum()
    }

    /// Encode an ordered (column, token) record into a fixed-width 0/1 vector.
    /// The record's column names must match the fitted columns exactly.
    pub fn transform(&self, fields: &[(&str, String)]) -> Result<Vec<f64>, EncodeError> {
        if fields.len() != self.columns.len() {
            return Err(EncodeError::SchemaMismatch(format!(
                "expected {} columns, got {}",
                self.columns.len(),
                fields.len()
            )));
        }

        let mut encoded = Vec::with_capacity(self.output_width());

        for (column, (name, token)) in self.columns.iter().zip(fields) {
            if column.name != *name {
                return Err(EncodeError::SchemaMismatch(format!(
                    "expected column {:?}, got {:?}",
                    column.name, name
                )));
            }

            let hit = column.categories.iter().position(|c| c == token);

            if hit.is_none() && self.unknown_policy == UnknownPolicy::Reject {
                return Err(EncodeError::UnknownCategory {
                    column: column.name.clone(),
                    token: token.clone(),
                });
            }

            for index in 0..column.categories.len() {
                encoded.push(if hit == Some(index) { 1.0 } else { 0.0 });
            }
        }

        Ok(encoded)
    }
}
