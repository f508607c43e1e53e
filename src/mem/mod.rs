//! Memory estimation core.
//!
//! Pure, synchronous and stateless per call: the data-type table is a
//! read-only constant, the formulas are side-effect-free functions and the
//! engine recomputes every breakdown per request. Concurrency limits and
//! timeouts belong to the enclosing I/O layer.

pub mod dtype;
pub mod engine;
pub mod format;
pub mod formulas;
pub mod request;

pub use engine::{estimate, MemoryBreakdown, MemoryResponse};
pub use format::{format_memory, parse_memory};
pub use request::MemoryRequest;
