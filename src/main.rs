//! Eco-Symphony - Weather-driven stories, music and images for a city
//!
//! The server:
//! - Fetches live weather from OpenWeather
//! - Writes a short story and eco content with an OpenAI-compatible LLM
//! - Generates music and images through Hugging Face inference endpoints
//! - Serves a single page plus a JSON API over per-visitor sessions

mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use chrono::Utc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::session::EVICTION_SWEEP_INTERVAL;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eco_symphony=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Eco-Symphony");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  OpenAI: {} ({})", config.openai_base_url, config.openai_model);
    tracing::info!("  OpenWeather: {}", config.openweather_base_url);
    tracing::info!("  MusicGen: {}", config.musicgen_api_url);
    tracing::info!("  Image generation: {}", config.imagegen_api_url);
    tracing::info!("  Session TTL: {} minutes", config.session_ttl.num_minutes());
    tracing::debug!(?config, "Full configuration");

    let state = Arc::new(AppState::new(&config));
    tracing::info!("Application state initialized");

    // Session eviction worker (drops sessions idle longer than the TTL)
    let eviction_worker = {
        let state = state.clone();
        let ttl = config.session_ttl;
        tokio::spawn(async move {
            tracing::info!("Starting session eviction worker");
            loop {
                tokio::time::sleep(EVICTION_SWEEP_INTERVAL).await;
                state.sessions.write().await.evict_idle(ttl, Utc::now());
            }
        })
    };

    // Build the router
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(http::create_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run until the server fails or Ctrl+C arrives
    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received, stopping eviction worker");
            eviction_worker.abort();
        }
    }

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
