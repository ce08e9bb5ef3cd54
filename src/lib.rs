//! HomeVal Algo - House sale price prediction service for the HomeVal web app
//!
//! This library provides the inference core used by the HomeVal web app.
//! It rebuilds the training-time feature layout from raw form input and
//! replays the fitted encode/scale/regress pipeline for one price per request.

pub mod artifacts;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::artifacts::{ArtifactStore, LinearModel, OneHotEncoder, StandardScaler, UnknownPolicy};
pub use crate::core::{normalize, NormalizeError, PredictError, Predictor, SchemaError};
pub use crate::models::{FieldValue, PredictRequest, PredictResponse, PredictionResult};
