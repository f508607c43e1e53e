//! Estimation orchestrator.
//!
//! Validates the request, runs the formulas, sizes GPUs against the raw byte
//! totals and assembles the response. Memory figures are formatted only at
//! the response boundary; GPU sizing works on the exact floats, so no
//! precision is lost to display rounding.

use serde::Serialize;

use super::format::format_memory;
use super::formulas;
use super::request::MemoryRequest;
use crate::error::Result;
use crate::gpu::{self, GpuRecommendation, Workload};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Recommendations embedded per workload in the response.
const TOP_GPUS: usize = 3;

/// Raw byte counts for each memory component.
///
/// Derived per request and never cached; recomputation is cheap and the
/// parameters vary per call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryBreakdown {
    pub model_weights_bytes: f64,
    pub kv_cache_bytes: f64,
    pub activation_bytes: f64,
    pub optimizer_bytes: f64,
    pub gradients_bytes: f64,
}

impl MemoryBreakdown {
    /// Bytes to serve the model: weights + KV cache + activations.
    pub fn inference_total(&self) -> f64 {
        self.model_weights_bytes + self.kv_cache_bytes + self.activation_bytes
    }

    /// Bytes to train the model: inference total + optimizer state +
    /// gradients.
    pub fn training_total(&self) -> f64 {
        self.inference_total() + self.optimizer_bytes + self.gradients_bytes
    }
}

/// Assembled estimation response.
///
/// Memory figures are human-readable strings ("13.04 GB"); training fields
/// are present only when the request carried an optimizer.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryResponse {
    pub model_weights: String,
    pub kv_cache: String,
    pub activation_memory: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimizer_memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradients_memory: Option<String>,
    pub inference_memory: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_memory: Option<String>,
    pub inference_gpus: Vec<GpuRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_gpus: Option<Vec<GpuRecommendation>>,
    /// Echoed total parameter count (model size in billions × 10⁹).
    pub total_params: f64,
    pub hidden_size: i64,
    pub sequence_length: i64,
}

/// Compute the full component breakdown for a validated request.
///
/// Optimizer and gradient components are zero unless the request asks for a
/// training estimate; the trainable parameter count falls back to the full
/// model size.
pub fn breakdown(request: &MemoryRequest) -> MemoryBreakdown {
    let mut breakdown = MemoryBreakdown {
        model_weights_bytes: formulas::model_weights_bytes(request.model_size, &request.precision),
        kv_cache_bytes: formulas::kv_cache_bytes(
            request.batch_size as f64,
            request.sequence_length as f64,
            request.num_hidden_layers as f64,
            request.hidden_size as f64,
            &request.precision,
        ),
        activation_bytes: formulas::activation_bytes(
            request.batch_size as f64,
            request.sequence_length as f64,
            request.hidden_size as f64,
            request.num_attention_heads as f64,
        ),
        ..Default::default()
    };

    if request.wants_training() {
        let trainable = request.trainable_params_billions();
        let optimizer = request.optimizer.as_deref().unwrap_or_default();
        breakdown.optimizer_bytes = formulas::optimizer_state_bytes(trainable, optimizer);
        breakdown.gradients_bytes = formulas::gradient_bytes(trainable);
    }

    breakdown
}

/// Estimate memory requirements and GPU options for `request`.
///
/// Validation failures abort before any formula executes; there are no
/// partial responses.
pub fn estimate(request: &MemoryRequest) -> Result<MemoryResponse> {
    request.validate()?;
    let breakdown = breakdown(request);

    let inference_total = breakdown.inference_total();
    let mut inference_gpus = gpu::recommend(inference_total / BYTES_PER_GB, Workload::Inference);
    inference_gpus.truncate(TOP_GPUS);

    let mut response = MemoryResponse {
        model_weights: format_memory(breakdown.model_weights_bytes),
        kv_cache: format_memory(breakdown.kv_cache_bytes),
        activation_memory: format_memory(breakdown.activation_bytes),
        optimizer_memory: None,
        gradients_memory: None,
        inference_memory: format_memory(inference_total),
        training_memory: None,
        inference_gpus,
        training_gpus: None,
        total_params: request.model_size * 1e9,
        hidden_size: request.hidden_size,
        sequence_length: request.sequence_length,
    };

    if request.wants_training() {
        let training_total = breakdown.training_total();
        let mut training_gpus = gpu::recommend(training_total / BYTES_PER_GB, Workload::Training);
        training_gpus.truncate(TOP_GPUS);

        response.optimizer_memory = Some(format_memory(breakdown.optimizer_bytes));
        response.gradients_memory = Some(format_memory(breakdown.gradients_bytes));
        response.training_memory = Some(format_memory(training_total));
        response.training_gpus = Some(training_gpus);
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EstimateError;
    use approx::assert_relative_eq;

    fn llama_7b() -> MemoryRequest {
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

    #[test]
    fn test_breakdown_totals_are_additive() {
        let mut request = llama_7b();
        request.optimizer = Some("AdamW".to_string());
        let b = breakdown(&request);
        assert_relative_eq!(
            b.inference_total(),
            b.model_weights_bytes + b.kv_cache_bytes + b.activation_bytes
        );
        assert_relative_eq!(
            b.training_total(),
            b.inference_total() + b.optimizer_bytes + b.gradients_bytes
        );
    }

    #[test]
    fn test_inference_estimate() {
        let response = estimate(&llama_7b()).unwrap();
        assert_eq!(response.model_weights, "13.04 GB");
        assert_eq!(response.kv_cache, "2.00 GB");
        assert_eq!(response.inference_gpus.len(), 3);
        assert!(response.training_gpus.is_none());
        assert!(response.optimizer_memory.is_none());
        assert!(response.gradients_memory.is_none());
        assert!(response.training_memory.is_none());
        assert_relative_eq!(response.total_params, 7e9);
        assert_eq!(response.hidden_size, 4096);
        assert_eq!(response.sequence_length, 4096);
    }

    #[test]
    fn test_training_estimate() {
        let mut request = llama_7b();
        request.optimizer = Some("AdamW".to_string());
        let response = estimate(&request).unwrap();
        assert_eq!(response.optimizer_memory.as_deref(), Some("52.15 GB"));
        assert_eq!(response.gradients_memory.as_deref(), Some("26.08 GB"));
        assert!(response.training_memory.is_some());
        assert_eq!(response.training_gpus.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_empty_optimizer_skips_training() {
        let mut request = llama_7b();
        request.optimizer = Some(String::new());
        let response = estimate(&request).unwrap();
        assert!(response.training_memory.is_none());
        assert!(response.training_gpus.is_none());
    }

    #[test]
    fn test_invalid_request_aborts_early() {
        let mut request = llama_7b();
        request.batch_size = 0;
        let err = estimate(&request).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidRequest(_)));
    }

    #[test]
    fn test_training_fields_absent_from_json() {
        let response = estimate(&llama_7b()).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("optimizer_memory").is_none());
        assert!(json.get("training_memory").is_none());
        assert!(json.get("training_gpus").is_none());
        assert_eq!(json["model_weights"], "13.04 GB");
    }
}
