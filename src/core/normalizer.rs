use crate::core::schema::{
    month_index, CategoricalSource, AFFIRMATIVE_TOKEN, CATEGORICAL_COLUMNS, NEGATIVE_TOKEN,
    NUMERIC_COLUMNS,
};
use crate::models::{FieldValue, PredictRequest};
use thiserror::Error;

/// Errors that can occur while rebuilding the training-time feature layout
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("unrecognized month name: {0}")]
    UnknownMonth(String),

    #[error("field {0} must be numeric")]
    NotNumeric(String),
}

/// Ordered (column, token) pairs ready for the one-hot encoder
pub type CategoricalRecord = Vec<(&'static str, String)>;

/// Ordered (column, value) pairs ready for the scaler
pub type NumericRecord = Vec<(&'static str, f64)>;

/// Rebuild the two ordered field sets the fitted transforms expect from an
/// arbitrary-order form record.
///
/// Booleans coerce to the fixed `"Yes"`/`"No"` tokens, the sale month name
/// translates to its 1-12 index, and the sale year is the pinned deployment
/// constant. Column order follows `core::schema` exactly.
pub fn normalize(
    input: &PredictRequest,
) -> Result<(CategoricalRecord, NumericRecord), NormalizeError> {
    let mut categorical = Vec::with_capacity(CATEGORICAL_COLUMNS.len());

    for column in CATEGORICAL_COLUMNS {
        let token = match column.source {
            CategoricalSource::Input(key) => categorical_token(require(input, key)?),
            CategoricalSource::MonthIndex(key) => {
                let value = require(input, key)?;
                let name = value
                    .as_text()
                    .ok_or_else(|| NormalizeError::UnknownMonth(categorical_token(value)))?;
                let index = month_index(name)
                    .ok_or_else(|| NormalizeError::UnknownMonth(name.to_string()))?;
                index.to_string()
            }
            CategoricalSource::Constant(value) => value.to_string(),
        };

        categorical.push((column.name, token));
    }

    let mut numeric = Vec::with_capacity(NUMERIC_COLUMNS.len());

    for column in NUMERIC_COLUMNS {
        let value = require(input, column.input_key)?;
        let number = value
            .as_number()
            .ok_or_else(|| NormalizeError::NotNumeric(column.input_key.to_string()))?;

        numeric.push((column.name, number));
    }

    Ok((categorical, numeric))
}

fn require<'a>(input: &'a PredictRequest, key: &str) -> Result<&'a FieldValue, NormalizeError> {
    input
        .get(key)
        .ok_or_else(|| NormalizeError::MissingField(key.to_string()))
}

/// Canonical categorical token for a form value. Integral numbers render
/// without a fractional part so they match the fit-time vocabulary.
fn categorical_token(value: &FieldValue) -> String {
    match value {
        FieldValue::Bool(true) => AFFIRMATIVE_TOKEN.to_string(),
        FieldValue::Bool(false) => NEGATIVE_TOKEN.to_string(),
        FieldValue::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", *n as i64),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Text(s) => s.clone(),
    }
}
