use crate::core::Predictor;
use crate::models::{HealthResponse, PredictRequest, PredictResponse};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
}

/// Configure all prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::post().to(predict))
        .route("/", web::get().to(predict_without_form))
        .route("/health", web::get().to(health_check));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// A bare GET carries no form data; the frontend contract expects the
/// failure marker in that case rather than an HTTP error.
async fn predict_without_form() -> impl Responder {
    HttpResponse::Ok().json(PredictResponse::invalid())
}

/// Predict endpoint
///
/// POST /
///
/// Request body: the web form's field map, e.g.
/// ```json
/// {
///   "Basement": true,
///   "Sale Month": "June",
///   "Total Assessed Value": 285000
/// }
/// ```
///
/// Responds `{"result": <price>}` on success and `{"result": "INVALID"}`
/// on any pipeline failure; the typed cause is only logged.
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    match state.predictor.predict(&req) {
        Ok(price) => {
            tracing::info!("Predicted sale price: {:.2}", price);
            HttpResponse::Ok().json(PredictResponse::price(price))
        }
        Err(e) => {
            tracing::warn!("Prediction failed: {}", e);
            HttpResponse::Ok().json(PredictResponse::invalid())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
