//! Smart AQI Monitoring System - Dashboard Server
//!
//! Serves the dashboard pages and chart data (city map, AQI trend, donut
//! gauge) built from synthetic AQI readings.

use axum::{routing::get, Router};
use shared::{ReadingSource, SyntheticReadings};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;
use error::AppError;
use services::SharedReadings;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub readings: SharedReadings,
}

impl AppState {
    /// State backed by the synthetic generator, seeded from config when a
    /// seed is set.
    pub fn new(config: Config) -> Self {
        let readings = match config.simulation.seed {
            Some(seed) => {
                tracing::info!("Using fixed simulation seed {}", seed);
                SyntheticReadings::seeded(seed)
            }
            None => SyntheticReadings::from_entropy(),
        };
        Self::with_source(config, readings)
    }

    pub fn with_source(config: Config, source: impl ReadingSource + Send + 'static) -> Self {
        let source: Box<dyn ReadingSource + Send> = Box::new(source);
        Self {
            config: Arc::new(config),
            readings: Arc::new(Mutex::new(source)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aqi_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;
    config.validate()?;

    tracing::info!("Starting AQI Dashboard Server");
    tracing::info!("Environment: {}", config.environment);

    let host: std::net::IpAddr = config.server.host.parse().map_err(|_| {
        AppError::Configuration(format!("server.host is not an IP address: {}", config.server.host))
    })?;
    let addr = SocketAddr::new(host, config.server.port);

    // Create application state
    let state = AppState::new(config);

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Smart AQI Monitoring System API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
