mod auth;
mod candidates;
mod config;
mod db;
mod errors;
mod jobs;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::matching::scorer::{MatchScorer, SubstringMatchScorer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobboard API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config).await?;

    let scorer: Arc<dyn MatchScorer> = Arc::new(SubstringMatchScorer);
    info!("Match scorer initialized (backend: {})", scorer.backend());

    let cors = build_cors(&config)?;

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        scorer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Session cookies need credentialed CORS, which requires a concrete origin.
/// Without `CORS_ORIGIN` the API falls back to a permissive policy.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    let Some(origin) = &config.cors_origin else {
        info!("CORS_ORIGIN not set, allowing any origin");
        return Ok(CorsLayer::permissive());
    };

    let origin: HeaderValue = origin
        .parse()
        .with_context(|| format!("CORS_ORIGIN '{origin}' is not a valid header value"))?;
    info!("CORS restricted to {:?}", origin);

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]))
}
