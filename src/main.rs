//! compute-gauge CLI
//!
//! GPU memory estimation for transformer language models.
//!
//! # Usage
//!
//! ```bash
//! # Start the HTTP service
//! compute-gauge serve --addr 0.0.0.0:8080
//!
//! # One-off estimate from a built-in preset
//! compute-gauge estimate --preset llama-2-7b
//!
//! # Training estimate with explicit architecture
//! compute-gauge estimate --model-size 7 --hidden-size 4096 \
//!     --num-hidden-layers 32 --num-attention-heads 32 \
//!     --sequence-length 4096 --optimizer AdamW
//!
//! # List presets and the GPU catalog
//! compute-gauge models
//! compute-gauge gpus
//! ```

use std::process::ExitCode;

use clap::Parser;
use compute_gauge::cli::{run_command, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match run_command(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
