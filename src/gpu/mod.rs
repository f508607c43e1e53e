//! GPU catalog and recommendation scoring.

mod recommend;

pub use recommend::{recommend, GpuRecommendation, Workload};

use serde::Serialize;

/// One GPU model the recommender can propose.
///
/// Catalog entries are static and read-only for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GpuSpec {
    pub name: &'static str,
    pub memory_gb: u32,
    pub bandwidth_tbs: f64,
    pub price_usd: f64,
    pub performance_tflops: f64,
}

/// Fixed GPU catalog.
///
/// Order matters: the recommender's stable sort preserves it on exact score
/// ties, which keeps results deterministic test-to-test.
pub const CATALOG: &[GpuSpec] = &[
    GpuSpec {
        name: "NVIDIA A100-80GB",
        memory_gb: 80,
        bandwidth_tbs: 2.0,
        price_usd: 10_000.0,
        performance_tflops: 312.0,
    },
    GpuSpec {
        name: "NVIDIA A100-40GB",
        memory_gb: 40,
        bandwidth_tbs: 1.6,
        price_usd: 6_000.0,
        performance_tflops: 312.0,
    },
    GpuSpec {
        name: "NVIDIA A6000",
        memory_gb: 48,
        bandwidth_tbs: 0.768,
        price_usd: 4_000.0,
        performance_tflops: 309.7,
    },
    GpuSpec {
        name: "NVIDIA L40",
        memory_gb: 48,
        bandwidth_tbs: 0.864,
        price_usd: 5_000.0,
        performance_tflops: 181.6,
    },
    GpuSpec {
        name: "NVIDIA A40",
        memory_gb: 48,
        bandwidth_tbs: 0.696,
        price_usd: 3_500.0,
        performance_tflops: 149.8,
    },
    GpuSpec {
        name: "NVIDIA A30",
        memory_gb: 24,
        bandwidth_tbs: 0.933,
        price_usd: 2_000.0,
        performance_tflops: 165.0,
    },
    GpuSpec {
        name: "NVIDIA A10",
        memory_gb: 24,
        bandwidth_tbs: 0.600,
        price_usd: 1_500.0,
        performance_tflops: 125.0,
    },
    GpuSpec {
        name: "NVIDIA H100-80GB",
        memory_gb: 80,
        bandwidth_tbs: 3.35,
        price_usd: 30_000.0,
        performance_tflops: 700.0,
    },
    GpuSpec {
        name: "NVIDIA H100-94GB",
        memory_gb: 94,
        bandwidth_tbs: 3.9,
        price_usd: 35_000.0,
        performance_tflops: 830.0,
    },
    GpuSpec {
        name: "NVIDIA RTX 6000 Ada Generation",
        memory_gb: 48,
        bandwidth_tbs: 0.960,
        price_usd: 6_800.0,
        performance_tflops: 260.0,
    },
];
