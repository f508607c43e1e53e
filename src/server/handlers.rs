//! HTTP request handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use super::AppState;
use crate::gpu::{self, GpuSpec};
use crate::mem::{engine, MemoryRequest, MemoryResponse};
use crate::presets::{ModelPreset, PRESETS};

/// Generate a request id for log correlation.
fn request_id() -> String {
    format!("req-{:016x}", rand::random::<u64>())
}

/// Health probe payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// Error body returned for failed estimations.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub request_id: String,
}

/// Health check handler.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.uptime_secs(),
    })
}

/// List the built-in model presets.
pub async fn list_models() -> Json<&'static [ModelPreset]> {
    Json(PRESETS)
}

/// List the GPU catalog.
pub async fn list_gpus() -> Json<&'static [GpuSpec]> {
    Json(gpu::CATALOG)
}

/// Run one estimation.
///
/// Validation failures are the caller's to fix (400). Anything else out of
/// the engine is deterministic given the same input, so it is not retried;
/// it maps to a generic 500 and the request is dropped.
pub async fn calculate(Json(request): Json<MemoryRequest>) -> Result<Json<MemoryResponse>, Response> {
    let req_id = request_id();

    match engine::estimate(&request) {
        Ok(response) => {
            info!(
                request_id = %req_id,
                model_size = request.model_size,
                precision = %request.precision,
                training = request.wants_training(),
                "estimation served"
            );
            Ok(Json(response))
        }
        Err(err) => {
            let status = if err.is_user_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            warn!(request_id = %req_id, error = %err, "estimation failed");
            let body = ErrorResponse { error: err.to_string(), request_id: req_id };
            Err((status, Json(body)).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ServerConfig;

    fn test_state() -> AppState {
        AppState::new(ServerConfig::default())
    }

    fn valid_request() -> MemoryRequest {
        MemoryRequest {
            model_size: 7.0,
            batch_size: 1,
            sequence_length: 4096,
            hidden_size: 4096,
            num_hidden_layers: 32,
            num_attention_heads: 32,
            num_key_value_heads: None,
            precision: "float16".to_string(),
            optimizer: None,
            trainable_params: None,
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let Json(body) = health_check(State(test_state())).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_list_models() {
        let Json(models) = list_models().await;
        assert!(models.iter().any(|m| m.name == "llama-2-7b"));
    }

    #[tokio::test]
    async fn test_list_gpus() {
        let Json(gpus) = list_gpus().await;
        assert_eq!(gpus.len(), gpu::CATALOG.len());
    }

    #[tokio::test]
    async fn test_calculate_valid() {
        let result = calculate(Json(valid_request())).await;
        let Json(response) = result.expect("valid request should succeed");
        assert_eq!(response.model_weights, "13.04 GB");
        assert_eq!(response.inference_gpus.len(), 3);
    }

    #[tokio::test]
    async fn test_calculate_invalid_is_bad_request() {
        let mut request = valid_request();
        request.precision = "fp99".to_string();
        let response = calculate(Json(request)).await.expect_err("should fail");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
