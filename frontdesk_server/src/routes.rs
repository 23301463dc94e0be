use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use frontdesk_core::LogRecord;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::{AppContext, testdata};

#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub message: String,
}

/// POST /api/message — run one extraction and append the result.
///
/// Exactly one append per successful extraction; no record is written on
/// any failure path.
pub async fn ingest_message(
    State(ctx): State<Arc<AppContext>>,
    Json(req): Json<IngestRequest>,
) -> Result<Json<Value>, ApiError> {
    info!("Received patient message ({} chars)", req.message.len());

    let parsed = ctx
        .extractor
        .extract(&req.message)
        .await
        .map_err(ApiError::Extraction)?;

    let record = LogRecord::new(req.message, parsed.clone());
    ctx.store.append(std::slice::from_ref(&record)).await?;

    info!("Log saved: {}", record.timestamp);
    Ok(Json(json!({ "data": parsed })))
}

/// GET /logs — the full record sequence, in append order.
pub async fn list_logs(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<LogRecord>>, ApiError> {
    Ok(Json(ctx.store.list().await?))
}

/// DELETE /logs/{timestamp} — exact-match delete. Succeeds even when
/// nothing matched.
pub async fn delete_log(
    State(ctx): State<Arc<AppContext>>,
    Path(timestamp): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = ctx.store.delete_by_timestamp(&timestamp).await?;
    info!("Deleted {removed} log(s) for timestamp {timestamp}");
    Ok(StatusCode::OK)
}

/// POST /generate-test-data — append ten synthetic records in one batch.
pub async fn generate_test_data(
    State(ctx): State<Arc<AppContext>>,
) -> Result<StatusCode, ApiError> {
    let records = testdata::sample_records(testdata::BATCH_SIZE);
    ctx.store.append(&records).await?;

    info!("Generated {} test log(s)", records.len());
    Ok(StatusCode::OK)
}

/// GET / — the static dashboard page.
pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../assets/dashboard.html"))
}
