//! Command-line interface.

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use crate::mem::{engine, MemoryRequest};
use crate::presets;
use crate::server::{self, ServerConfig};
use crate::{gpu, MemoryResponse};

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(
    name = "compute-gauge",
    version,
    about = "Estimate GPU memory for LLM inference and training"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP estimation service
    Serve {
        /// Address to bind, host:port
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
        /// Disable permissive CORS
        #[arg(long)]
        no_cors: bool,
    },
    /// Estimate memory for one configuration and print the result
    Estimate(EstimateArgs),
    /// List the built-in model presets
    Models,
    /// List the GPU catalog
    Gpus,
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Start from a built-in preset (see `models`); flags override its values
    #[arg(long)]
    pub preset: Option<String>,
    /// Model size in billions of parameters
    #[arg(long)]
    pub model_size: Option<f64>,
    #[arg(long, default_value_t = 1)]
    pub batch_size: i64,
    #[arg(long)]
    pub sequence_length: Option<i64>,
    #[arg(long)]
    pub hidden_size: Option<i64>,
    #[arg(long)]
    pub num_hidden_layers: Option<i64>,
    #[arg(long)]
    pub num_attention_heads: Option<i64>,
    /// Weight precision: float32, float16, bfloat16, int8 or int4
    #[arg(long)]
    pub precision: Option<String>,
    /// Optimizer kind (AdamW, Adam, QAdamW, SGD); switches on the training
    /// estimate
    #[arg(long)]
    pub optimizer: Option<String>,
    /// Trainable parameters in billions (defaults to the full model)
    #[arg(long)]
    pub trainable_params: Option<f64>,
    /// Print the raw JSON response instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Errors surfaced to the terminal.
pub type CliError = Box<dyn std::error::Error>;

/// Dispatch a parsed command line.
pub async fn run_command(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Serve { addr, no_cors } => {
            let mut config = ServerConfig::default().with_address(addr);
            if no_cors {
                config = config.without_cors();
            }
            server::run(config).await?;
        }
        Command::Estimate(args) => run_estimate(&args)?,
        Command::Models => {
            for preset in presets::PRESETS {
                println!(
                    "{:<12} {:>6.2}B params, hidden {}, {} layers, {} heads, context {}, {}",
                    preset.name,
                    preset.model_size,
                    preset.hidden_size,
                    preset.num_hidden_layers,
                    preset.num_attention_heads,
                    preset.max_position_embeddings,
                    preset.torch_dtype,
                );
            }
        }
        Command::Gpus => {
            for gpu in gpu::CATALOG {
                println!(
                    "{:<32} {:>3} GB, {:.3} TB/s, {:>6.1} TFLOPS, ${}",
                    gpu.name, gpu.memory_gb, gpu.bandwidth_tbs, gpu.performance_tflops, gpu.price_usd,
                );
            }
        }
    }
    Ok(())
}

fn run_estimate(args: &EstimateArgs) -> Result<(), CliError> {
    let request = build_request(args)?;
    let response = engine::estimate(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_summary(&response);
    }
    Ok(())
}

/// Assemble a request from a preset and/or explicit flags; explicit flags
/// win.
fn build_request(args: &EstimateArgs) -> Result<MemoryRequest, CliError> {
    let mut request = match &args.preset {
        Some(name) => presets::find(name)
            .ok_or_else(|| format!("unknown preset: {name} (try `compute-gauge models`)"))?
            .request(args.batch_size),
        None => MemoryRequest {
            model_size: required(args.model_size, "--model-size")?,
            batch_size: args.batch_size,
            sequence_length: required(args.sequence_length, "--sequence-length")?,
            hidden_size: required(args.hidden_size, "--hidden-size")?,
            num_hidden_layers: required(args.num_hidden_layers, "--num-hidden-layers")?,
            num_attention_heads: required(args.num_attention_heads, "--num-attention-heads")?,
            num_key_value_heads: None,
            precision: "float16".to_string(),
            optimizer: None,
            trainable_params: None,
        },
    };

    if let Some(model_size) = args.model_size {
        request.model_size = model_size;
    }
    if let Some(sequence_length) = args.sequence_length {
        request.sequence_length = sequence_length;
    }
    if let Some(hidden_size) = args.hidden_size {
        request.hidden_size = hidden_size;
    }
    if let Some(num_hidden_layers) = args.num_hidden_layers {
        request.num_hidden_layers = num_hidden_layers;
    }
    if let Some(num_attention_heads) = args.num_attention_heads {
        request.num_attention_heads = num_attention_heads;
    }
    if let Some(precision) = &args.precision {
        request.precision = precision.clone();
    }
    request.optimizer = args.optimizer.clone();
    request.trainable_params = args.trainable_params;

    Ok(request)
}

fn required<T>(value: Option<T>, flag: &str) -> Result<T, CliError> {
    value.ok_or_else(|| format!("{flag} is required without --preset").into())
}

fn print_summary(response: &MemoryResponse) {
    println!("Model weights:     {}", response.model_weights);
    println!("KV cache:          {}", response.kv_cache);
    println!("Activation memory: {}", response.activation_memory);
    println!("Inference total:   {}", response.inference_memory);

    if let (Some(optimizer), Some(gradients), Some(training)) = (
        &response.optimizer_memory,
        &response.gradients_memory,
        &response.training_memory,
    ) {
        println!("Optimizer state:   {optimizer}");
        println!("Gradients:         {gradients}");
        println!("Training total:    {training}");
    }

    println!("\nRecommended GPUs (inference):");
    for rec in &response.inference_gpus {
        println!(
            "  {:<32} x{} (utilization {:.1}, cost ${})",
            rec.gpu.name, rec.num_gpus, rec.utilization_score, rec.total_cost,
        );
    }
    if let Some(training_gpus) = &response.training_gpus {
        println!("\nRecommended GPUs (training):");
        for rec in training_gpus {
            println!(
                "  {:<32} x{} (utilization {:.1}, cost ${})",
                rec.gpu.name, rec.num_gpus, rec.utilization_score, rec.total_cost,
            );
        }
    }
}
