use serde::{Deserialize, Serialize};

/// Marker string returned in place of a price when the pipeline fails.
/// The frontend switches on this literal, so it must not change.
pub const FAILURE_MARKER: &str = "INVALID";

/// Response for the predict endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub result: PredictionResult,
}

/// Either a predicted price or the failure marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionResult {
    Price(f64),
    Marker(String),
}

impl PredictResponse {
    /// Successful prediction
    pub fn price(value: f64) -> Self {
        Self {
            result: PredictionResult::Price(value),
        }
    }

    /// Undifferentiated failure response
    pub fn invalid() -> Self {
        Self {
            result: PredictionResult::Marker(FAILURE_MARKER.to_string()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_response_serializes_as_number() {
        let response = PredictResponse::price(235000.5);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"result":235000.5}"#);
    }

    #[test]
    fn test_invalid_response_serializes_as_marker() {
        let response = PredictResponse::invalid();
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"result":"INVALID"}"#);
    }
}
