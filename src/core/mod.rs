// Core pipeline exports
pub mod normalizer;
pub mod pipeline;
pub mod schema;

pub use normalizer::{normalize, CategoricalRecord, NormalizeError, NumericRecord};
pub use pipeline::{PredictError, Predictor, SchemaError};
