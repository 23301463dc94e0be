#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::needless_pass_by_value,
    clippy::unused_async
)]

//! HTTP surface of the clinic relay.
//!
//! Endpoints:
//!   GET    /                    (dashboard)
//!   POST   /api/message
//!   GET    /logs
//!   DELETE /logs/{timestamp}
//!   POST   /generate-test-data
//!
//! Each request runs as its own task; the store does no cross-request
//! locking, so concurrent mutations are last-writer-wins.

pub mod error;
pub mod routes;
pub mod testdata;

use axum::{
    Router,
    routing::{delete, get, post},
};
use frontdesk_core::MessageExtractor;
use frontdesk_store::LogStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub use error::ApiError;

/// Shared per-process state handed to every handler.
pub struct AppContext {
    pub store: LogStore,
    pub extractor: Arc<dyn MessageExtractor>,
}

#[must_use]
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(routes::dashboard))
        .route("/api/message", post(routes::ingest_message))
        .route("/logs", get(routes::list_logs))
        .route("/logs/{timestamp}", delete(routes::delete_log))
        .route("/generate-test-data", post(routes::generate_test_data))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}

pub async fn start_server(ctx: Arc<AppContext>, port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    let router = build_router(ctx);

    info!("Clinic relay listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
