//! GPU memory estimation for transformer language models.
//!
//! Given a model's architectural parameters (hidden size, layer count,
//! attention heads, sequence length, batch size, numeric precision) and
//! optionally training parameters (optimizer kind, trainable parameter
//! count), estimates the memory footprint in bytes and recommends GPUs from
//! a fixed catalog that can hold it.
//!
//! The estimate uses published heuristic multipliers; it is not a
//! cycle-accurate memory model and does not account for multi-GPU sharding
//! or allocator fragmentation.
//!
//! # Example
//!
//! ```
//! use compute_gauge::mem::{engine, MemoryRequest};
//!
//! let request = MemoryRequest {
//!     model_size: 7.0,
//!     batch_size: 1,
//!     sequence_length: 4096,
//!     hidden_size: 4096,
//!     num_hidden_layers: 32,
//!     num_attention_heads: 32,
//!     num_key_value_heads: None,
//!     precision: "float16".to_string(),
//!     optimizer: None,
//!     trainable_params: None,
//! };
//! let response = engine::estimate(&request).unwrap();
//! assert_eq!(response.model_weights, "13.04 GB");
//! ```

pub mod cli;
pub mod error;
pub mod gpu;
pub mod mem;
pub mod presets;
pub mod server;

pub use error::{EstimateError, Result};
pub use mem::engine::{estimate, MemoryBreakdown, MemoryResponse};
pub use mem::request::MemoryRequest;
