//! Pure memory formulas.
//!
//! Every function is total over its inputs and side-effect free: an unknown
//! precision yields 0 bytes rather than an error, because requests are
//! validated before any formula runs. All results are byte counts as `f64`.

use super::dtype;

const BILLION: f64 = 1e9;

/// Bytes needed to hold the model weights at the given precision.
pub fn model_weights_bytes(model_size_billions: f64, precision: &str) -> f64 {
    let params = model_size_billions * BILLION;
    dtype::lookup(precision).map_or(0.0, |size| params * size)
}

/// Bytes for the cached key/value attention tensors across all layers.
///
/// The factor 2 covers the separate key and value tensors. The cache is
/// sized from the full hidden dimension; grouped-query head sharing is
/// intentionally not modeled.
pub fn kv_cache_bytes(
    batch_size: f64,
    seq_length: f64,
    num_layers: f64,
    hidden_size: f64,
    precision: &str,
) -> f64 {
    dtype::lookup(precision)
        .map_or(0.0, |size| 2.0 * batch_size * seq_length * num_layers * hidden_size * size)
}

/// Transient activation memory for a forward pass.
///
/// Activations are costed at float32 regardless of the requested precision;
/// they are commonly kept in higher precision for numerical stability.
pub fn activation_bytes(batch_size: f64, seq_length: f64, hidden_size: f64, num_heads: f64) -> f64 {
    const FLOAT32_BYTES: f64 = 4.0;
    let factor = 34.0 + (5.0 * seq_length * num_heads) / hidden_size;
    batch_size * seq_length * hidden_size * factor * FLOAT32_BYTES
}

/// Optimizer state for the given optimizer kind.
///
/// AdamW/Adam keep two float32 moments per parameter (8 bytes), QAdamW
/// quantizes them down to 2 bytes, SGD with momentum costs 4. State is only
/// counted for recognized optimizers; anything else contributes 0.
pub fn optimizer_state_bytes(trainable_params_billions: f64, optimizer: &str) -> f64 {
    let params = trainable_params_billions * BILLION;
    let bytes_per_param = match optimizer {
        "AdamW" | "Adam" => 8.0,
        "QAdamW" => 2.0,
        "SGD" => 4.0,
        _ => 0.0,
    };
    params * bytes_per_param
}

/// Gradient storage, always float32 (4 bytes per trainable parameter).
pub fn gradient_bytes(trainable_params_billions: f64) -> f64 {
    trainable_params_billions * BILLION * 4.0
}
