//! End-to-end estimation scenarios.

use compute_gauge::mem::{engine, format_memory, parse_memory, MemoryRequest};
use compute_gauge::gpu::{recommend, Workload};

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
fn llama_7b_inference_figures() {
    let response = engine::estimate(&llama_7b()).unwrap();

    // 7e9 params at 2 bytes = 14,000,000,000 bytes = 13.04 binary GB.
    assert_eq!(response.model_weights, "13.04 GB");
    // 2 * 1 * 4096 * 32 * 4096 * 2 bytes = exactly 2 GiB.
    assert_eq!(response.kv_cache, "2.00 GB");

    assert_eq!(response.total_params, 7e9);
    assert_eq!(response.hidden_size, 4096);
    assert_eq!(response.sequence_length, 4096);
    assert_eq!(response.inference_gpus.len(), 3);
    assert!(response.training_gpus.is_none());
}

#[test]
fn llama_7b_adamw_training_figures() {
    let mut request = llama_7b();
    request.optimizer = Some("AdamW".to_string());
    request.trainable_params = Some(7.0);
    let response = engine::estimate(&request).unwrap();

    // 7e9 * 8 bytes of optimizer state, 7e9 * 4 bytes of gradients.
    assert_eq!(response.optimizer_memory.as_deref(), Some("52.15 GB"));
    assert_eq!(response.gradients_memory.as_deref(), Some("26.08 GB"));

    let training_gpus = response.training_gpus.expect("training requested");
    assert_eq!(training_gpus.len(), 3);
}

#[test]
fn training_total_includes_inference_total() {
    let mut request = llama_7b();
    request.optimizer = Some("SGD".to_string());
    let breakdown = engine::breakdown(&request);
    let training = breakdown.training_total();
    let inference = breakdown.inference_total();
    assert!(training > inference);
    assert_eq!(
        training,
        inference + breakdown.optimizer_bytes + breakdown.gradients_bytes
    );
}

#[test]
fn unrecognized_optimizer_still_counts_gradients() {
    let mut request = llama_7b();
    request.optimizer = Some("Lion".to_string());
    let breakdown = engine::breakdown(&request);
    assert_eq!(breakdown.optimizer_bytes, 0.0);
    assert_eq!(breakdown.gradients_bytes, 28_000_000_000.0);
}

#[test]
fn response_json_matches_wire_contract() {
    let mut request = llama_7b();
    request.optimizer = Some("AdamW".to_string());
    let response = engine::estimate(&request).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    for field in [
        "model_weights",
        "kv_cache",
        "activation_memory",
        "optimizer_memory",
        "gradients_memory",
        "inference_memory",
        "training_memory",
        "inference_gpus",
        "training_gpus",
        "total_params",
        "hidden_size",
        "sequence_length",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }

    let gpu = &json["inference_gpus"][0];
    assert!(gpu["gpu"]["name"].is_string());
    assert!(gpu["num_gpus"].is_u64());
    assert!(gpu["utilization_score"].is_number());
    assert!(gpu["cost_score"].is_number());
    assert!(gpu["total_cost"].is_number());
}

#[test]
fn recommendation_scenario_100gb_on_80gb_part() {
    let recommendations = recommend(100.0, Workload::Inference);
    let a100 = recommendations
        .iter()
        .find(|r| r.gpu.name == "NVIDIA A100-80GB")
        .expect("A100-80GB should make the shortlist at 100 GB");
    assert_eq!(a100.num_gpus, 2);
    assert!((a100.utilization_score - 62.5).abs() < 1e-9);
}

#[test]
fn formatted_totals_parse_back_consistently() {
    let request = llama_7b();
    let response = engine::estimate(&request).unwrap();
    let breakdown = engine::breakdown(&request);

    let recovered = parse_memory(&response.inference_memory).unwrap();
    let exact = breakdown.inference_total();
    let relative_error = (recovered - exact).abs() / exact;
    assert!(relative_error < 0.01, "relative error {relative_error}");

    assert_eq!(format_memory(exact), response.inference_memory);
}
