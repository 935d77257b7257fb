//! HTTP surface for Continuity.
//!
//! Exposes the resolver and knowledge store over a small JSON API:
//! `GET /`, `POST /add_memory` and `POST /query`.

mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::AppState;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use log::info;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the service router with permissive CORS for browser frontends.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/add_memory", post(routes::add_memory))
        .route("/query", post(routes::query))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        "Continuity listening on http://{}",
        listener.local_addr().context("listener address")?
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("Continuity stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
