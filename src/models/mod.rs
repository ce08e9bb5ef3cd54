// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::FieldValue;
pub use requests::PredictRequest;
pub use responses::{ErrorResponse, HealthResponse, PredictResponse, PredictionResult, FAILURE_MARKER};
