//! HTTP front end.
//!
//! A thin axum wrapper over the estimation engine. The engine itself is
//! pure and stateless per call, so requests are served concurrently with no
//! coordination; concurrency limits and timeouts live here, not in the core.
//!
//! # Example
//!
//! ```ignore
//! use compute_gauge::server::{self, ServerConfig};
//!
//! let config = ServerConfig::default().with_address("0.0.0.0:8080".parse().unwrap());
//! server::run(config).await?;
//! ```

mod handlers;

pub use handlers::{calculate, health_check, list_gpus, list_models, ErrorResponse, HealthResponse};

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    pub address: SocketAddr,
    /// Whether to attach a permissive CORS layer.
    pub cors_enabled: bool,
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:8080".parse().expect("static address"),
            cors_enabled: true,
            max_body_size: 64 * 1024,
        }
    }
}

impl ServerConfig {
    /// Set the bind address.
    pub fn with_address(mut self, address: SocketAddr) -> Self {
        self.address = address;
        self
    }

    /// Disable CORS.
    pub fn without_cors(mut self) -> Self {
        self.cors_enabled = false;
        self
    }
}

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ServerConfig,
    started: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config, started: Instant::now() }
    }

    /// Seconds since the server started.
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;
    let cors_enabled = state.config.cors_enabled;

    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/models", get(handlers::list_models))
        .route("/api/gpus", get(handlers::list_gpus))
        .route("/api/calculate", post(handlers::calculate))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_size));

    if cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Bind and serve until the process is stopped.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let address = config.address;
    let app = router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!(%address, "listening");
    axum::serve(listener, app).await
}
