//! Browser UI: a single page plus the JSON endpoint it calls.

pub mod handlers;
pub mod types;

use crate::pipeline::HaikuPipeline;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router around a shared pipeline.
pub fn router(pipeline: Arc<HaikuPipeline>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/api/generate", post(handlers::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(pipeline)
}

/// Bind `addr` and serve until the process exits.
pub async fn serve(addr: SocketAddr, pipeline: Arc<HaikuPipeline>) -> crate::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(pipeline)).await?;
    Ok(())
}
