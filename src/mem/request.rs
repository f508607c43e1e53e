//! Estimation request and validation.

use serde::{Deserialize, Serialize};

use super::dtype;
use crate::error::{EstimateError, Result};

/// One memory-estimation request.
///
/// Constructed from a single inbound call, validated once and never mutated
/// afterwards. Integer fields are signed so that out-of-range values reach
/// [`MemoryRequest::validate`] with a specific message instead of dying in
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRequest {
    /// Model size in billions of parameters.
    pub model_size: f64,
    /// Concurrent sequences per forward pass.
    pub batch_size: i64,
    /// Context length in tokens.
    pub sequence_length: i64,
    /// Transformer hidden dimension.
    pub hidden_size: i64,
    /// Number of transformer layers.
    pub num_hidden_layers: i64,
    /// Number of attention heads.
    pub num_attention_heads: i64,
    /// Key/value heads for grouped-query attention. Accepted for
    /// compatibility with published model configs; the KV-cache formula
    /// sizes from the full hidden dimension and does not use it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_key_value_heads: Option<i64>,
    /// Numeric precision of the weights, e.g. `"float16"`.
    pub precision: String,
    /// Optimizer kind. Presence of a non-empty value switches on the
    /// training estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimizer: Option<String>,
    /// Trainable parameters in billions. Defaults to `model_size` when
    /// unset, i.e. full fine-tuning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainable_params: Option<f64>,
}

impl MemoryRequest {
    /// Check the request for structurally valid, physically sensible values.
    ///
    /// Pure predicate with no side effects; runs once per request, before
    /// any formula. Each rejection names the failing condition.
    pub fn validate(&self) -> Result<()> {
        if self.model_size <= 0.0 {
            return Err(invalid("model size must be positive"));
        }
        if self.hidden_size <= 0 {
            return Err(invalid("hidden size must be positive"));
        }
        if self.num_hidden_layers <= 0 {
            return Err(invalid("number of layers must be positive"));
        }
        if self.num_attention_heads <= 0 {
            return Err(invalid("number of attention heads must be positive"));
        }
        if self.sequence_length <= 0 {
            return Err(invalid("sequence length must be positive"));
        }
        if self.batch_size <= 0 {
            return Err(invalid("batch size must be positive"));
        }
        if dtype::lookup(&self.precision).is_none() {
            return Err(invalid(&format!("invalid precision type: {}", self.precision)));
        }
        Ok(())
    }

    /// Parameter count used for optimizer and gradient sizing, in billions.
    pub fn trainable_params_billions(&self) -> f64 {
        self.trainable_params.unwrap_or(self.model_size)
    }

    /// Whether a training estimate was requested.
    pub fn wants_training(&self) -> bool {
        self.optimizer.as_deref().is_some_and(|o| !o.is_empty())
    }
}

fn invalid(message: &str) -> EstimateError {
    EstimateError::InvalidRequest(message.to_string())
}
