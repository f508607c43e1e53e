//! Built-in model architecture presets.
//!
//! Compiled-in equivalents of the published config values for a handful of
//! well-known models, so callers can fill an estimation request without
//! hunting down hidden sizes and head counts.

use serde::Serialize;

use crate::mem::MemoryRequest;

/// Architecture summary for one well-known model.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelPreset {
    pub name: &'static str,
    /// Parameter count in billions.
    pub model_size: f64,
    pub hidden_size: i64,
    pub num_hidden_layers: i64,
    pub num_attention_heads: i64,
    pub num_key_value_heads: i64,
    /// Maximum supported context length.
    pub max_position_embeddings: i64,
    /// Precision the weights are usually published at.
    pub torch_dtype: &'static str,
}

/// Built-in preset catalog.
pub const PRESETS: &[ModelPreset] = &[
    ModelPreset {
        name: "llama-2-7b",
        model_size: 7.0,
        hidden_size: 4096,
        num_hidden_layers: 32,
        num_attention_heads: 32,
        num_key_value_heads: 32,
        max_position_embeddings: 4096,
        torch_dtype: "float16",
    },
    ModelPreset {
        name: "llama-2-13b",
        model_size: 13.0,
        hidden_size: 5120,
        num_hidden_layers: 40,
        num_attention_heads: 40,
        num_key_value_heads: 40,
        max_position_embeddings: 4096,
        torch_dtype: "float16",
    },
    ModelPreset {
        name: "llama-2-70b",
        model_size: 70.0,
        hidden_size: 8192,
        num_hidden_layers: 80,
        num_attention_heads: 64,
        num_key_value_heads: 8,
        max_position_embeddings: 4096,
        torch_dtype: "float16",
    },
    ModelPreset {
        name: "mistral-7b",
        model_size: 7.24,
        hidden_size: 4096,
        num_hidden_layers: 32,
        num_attention_heads: 32,
        num_key_value_heads: 8,
        max_position_embeddings: 32768,
        torch_dtype: "bfloat16",
    },
    ModelPreset {
        name: "phi-2",
        model_size: 2.78,
        hidden_size: 2560,
        num_hidden_layers: 32,
        num_attention_heads: 32,
        num_key_value_heads: 32,
        max_position_embeddings: 2048,
        torch_dtype: "float16",
    },
];

/// Find a preset by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static ModelPreset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl ModelPreset {
    /// Build an estimation request from this architecture at the model's
    /// full context length.
    pub fn request(&self, batch_size: i64) -> MemoryRequest {
        MemoryRequest {
            model_size: self.model_size,
            batch_size,
            sequence_length: self.max_position_embeddings,
            hidden_size: self.hidden_size,
            num_hidden_layers: self.num_hidden_layers,
            num_attention_heads: self.num_attention_heads,
            num_key_value_heads: Some(self.num_key_value_heads),
            precision: self.torch_dtype.to_string(),
            optimizer: None,
            trainable_params: None,
        }
    }
}
