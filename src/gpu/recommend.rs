//! Recommendation scoring.

use serde::Serialize;

use super::{GpuSpec, CATALOG};

/// Upper bound on recommendation list length.
const MAX_RECOMMENDATIONS: usize = 5;

/// Workload the GPUs are being sized for.
///
/// The scoring multipliers live here rather than behind a boolean flag:
/// training is bandwidth-bound, so its utilization score is weighted by
/// memory bandwidth, and it tolerates a cost premium, so its cost score gets
/// a 0.8 discount that lets otherwise-expensive parts rank comparably.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    Inference,
    Training,
}

impl Workload {
    /// Apply this workload's multipliers to the base scores.
    fn adjust_scores(self, gpu: &GpuSpec, utilization_score: f64, cost_score: f64) -> (f64, f64) {
        match self {
            Workload::Inference => (utilization_score, cost_score),
            Workload::Training => {
                (utilization_score * (gpu.bandwidth_tbs / 2.0), cost_score * 0.8)
            }
        }
    }
}

/// One scored catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct GpuRecommendation {
    pub gpu: GpuSpec,
    pub num_gpus: u32,
    pub utilization_score: f64,
    pub cost_score: f64,
    pub total_cost: f64,
}

impl GpuRecommendation {
    /// Ranking key: high utilization, low normalized cost.
    pub fn score(&self) -> f64 {
        self.utilization_score - self.cost_score
    }
}

/// Score every catalog GPU against `required_memory_gb` and return the best
/// entries, highest score first, at most five.
pub fn recommend(required_memory_gb: f64, workload: Workload) -> Vec<GpuRecommendation> {
    let mut recommendations: Vec<GpuRecommendation> = CATALOG
        .iter()
        .map(|gpu| score_gpu(gpu, required_memory_gb, workload))
        .collect();

    // Stable sort: catalog order decides exact score ties.
    recommendations.sort_by(|a, b| b.score().total_cmp(&a.score()));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

fn score_gpu(gpu: &GpuSpec, required_memory_gb: f64, workload: Workload) -> GpuRecommendation {
    let memory_gb = f64::from(gpu.memory_gb);
    // A requirement of 0, or a GPU larger than the requirement, still buys
    // one unit.
    let num_gpus = (required_memory_gb / memory_gb).ceil().max(1.0);
    let memory_utilization = required_memory_gb / (num_gpus * memory_gb);
    let total_cost = num_gpus * gpu.price_usd;
    let (utilization_score, cost_score) = workload.adjust_scores(
        gpu,
        memory_utilization * 100.0,
        total_cost / gpu.performance_tflops,
    );

    GpuRecommendation {
        gpu: *gpu,
        num_gpus: num_gpus as u32,
        utilization_score,
        cost_score,
        total_cost,
    }
}
