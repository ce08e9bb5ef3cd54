use crate::artifacts::{
    ArtifactStore, EncodeError, LinearModel, OneHotEncoder, ScaleError, StandardScaler,
};
use crate::core::normalizer::{normalize, NormalizeError};
use crate::core::schema;
use crate::models::PredictRequest;
use ndarray::Array1;
use std::sync::Arc;
use thiserror::Error;

/// Errors from a single prediction attempt
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error("model produced a non-finite prediction")]
    NonFiniteOutput,
}

/// Schema drift detected between the fixed field lists and loaded artifacts
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("encoder columns do not match the categorical schema: {0}")]
    EncoderColumns(String),

    #[error("scaler columns do not match the numeric schema: {0}")]
    ScalerColumns(String),

    #[error("model feature names do not match encoder + scaler output: {0}")]
    ModelFeatures(String),
}

/// Inference pipeline over the three fitted artifacts
///
/// # Pipeline Stages
/// 1. Normalize the form record into ordered field sets
/// 2. One-hot encode the categorical set
/// 3. Scale the numeric set
/// 4. Concatenate encoded-then-scaled and apply the regression model
///
/// Construction validates the whole schema chain, so column drift between
/// artifacts and the fixed field lists fails here instead of producing
/// silently wrong predictions.
#[derive(Debug, Clone)]
pub struct Predictor {
    encoder: Arc<OneHotEncoder>,
    scaler: Arc<StandardScaler>,
    model: Arc<LinearModel>,
}

impl Predictor {
    pub fn new(
        encoder: Arc<OneHotEncoder>,
        scaler: Arc<StandardScaler>,
        model: Arc<LinearModel>,
    ) -> Result<Self, SchemaError> {
        let expected_categorical = schema::categorical_column_names();
        if encoder.column_names() != expected_categorical {
            return Err(SchemaError::EncoderColumns(format!(
                "expected {:?}, artifact has {:?}",
                expected_categorical,
                encoder.column_names()
            )));
        }

        let expected_numeric = schema::numeric_column_names();
        if scaler.column_names() != expected_numeric {
            return Err(SchemaError::ScalerColumns(format!(
                "expected {:?}, artifact has {:?}",
                expected_numeric,
                scaler.column_names()
            )));
        }

        // The concatenation layout the model was trained on: encoded columns
        // first, scaled columns second.
        let mut expected_features = encoder.feature_names();
        expected_features.extend(scaler.feature_names());
        if model.feature_names != expected_features {
            return Err(SchemaError::ModelFeatures(format!(
                "expected {} features ending in {:?}, model records {} ending in {:?}",
                expected_features.len(),
                expected_features.last(),
                model.feature_names.len(),
                model.feature_names.last()
            )));
        }

        Ok(Self {
            encoder,
            scaler,
            model,
        })
    }

    /// Build a predictor from a loaded artifact store
    pub fn from_store(store: &ArtifactStore) -> Result<Self, SchemaError> {
        Self::new(store.encoder.clone(), store.scaler.clone(), store.model.clone())
    }

    /// Width of the concatenated feature vector
    pub fn n_features(&self) -> usize {
        self.model.n_features()
    }

    /// Predict one sale price for a form record.
    /// Pure given the fitted artifacts: the same record always yields a
    /// bit-identical result.
    pub fn predict(&self, input: &PredictRequest) -> Result<f64, PredictError> {
        let (categorical, numeric) = normalize(input)?;

        let encoded = self.encoder.transform(&categorical)?;
        let scaled = self.scaler.transform(&numeric)?;

        // Encoded block first, scaled block second - the training-time layout
        let mut features = Vec::with_capacity(encoded.len() + scaled.len());
        features.extend_from_slice(&encoded);
        features.extend_from_slice(&scaled);

        let prediction = self.model.predict(&Array1::from_vec(features));
        if !prediction.is_finite() {
            return Err(PredictError::NonFiniteOutput);
        }

        Ok(prediction)
    }
}
