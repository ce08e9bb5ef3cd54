use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when applying a fitted scaler
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("scaler schema mismatch: {0}")]
    SchemaMismatch(String),
}

/// One numeric column's fitted scaling parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerColumn {
    pub name: String,
    pub mean: f64,
    pub scale: f64,
}

/// Fitted standard scaler
///
/// Holds per-column mean and scale recorded at training time; `transform`
/// replays `(x - mean) / scale` for each column in fit order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub columns: Vec<ScalerColumn>,
}

impl StandardScaler {
    /// Input column names in fit order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Canonical output column names (scaling keeps the input names)
    pub fn feature_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Scale an ordered (column, value) record.
    /// The record's column names must match the fitted columns exactly.
    pub fn transform(&self, fields: &[(&str, f64)]) -> Result<Vec<f64>, ScaleError> {
        if fields.len() != self.columns.len() {
            return Err(ScaleError::SchemaMismatch(format!(
                "expected {} columns, got {}",
                self.columns.len(),
                fields.len()
            )));
        }

        let mut scaled = Vec::with_capacity(self.columns.len());

        for (column, (name, value)) in self.columns.iter().zip(fields) {
            if column.name != *name {
                return Err(ScaleError::SchemaMismatch(format!(
                    "expected column {:?}, got {:?}",
                    column.name, name
                )));
            }

            scaled.push((value - column.mean) / column.scale);
        }

        Ok(scaled)
    }
}
