//! Integration tests for the HTTP handlers.
//!
//! These drive the route handlers directly against a temp-file store and a
//! mocked extractor, verifying that:
//! - ingestion appends exactly one record per successful extraction
//! - extraction failure appends nothing
//! - the generator produces a full, well-formed batch
//! - delete is exact-match, always-200, and idempotent
//! - the store's strict/forgiving read asymmetry survives the HTTP layer

#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{SubsecRound, Utc};
use frontdesk_core::{Intent, LogRecord, MessageExtractor, ParsedMessage};
use frontdesk_server::routes::{
    IngestRequest, delete_log, generate_test_data, ingest_message, list_logs,
};
use frontdesk_server::{ApiError, AppContext};
use frontdesk_store::LogStore;
use std::sync::Arc;

struct FixedExtractor(ParsedMessage);

#[async_trait]
impl MessageExtractor for FixedExtractor {
    async fn extract(&self, _message: &str) -> anyhow::Result<ParsedMessage> {
        Ok(self.0.clone())
    }
}

struct FailingExtractor;

#[async_trait]
impl MessageExtractor for FailingExtractor {
    async fn extract(&self, _message: &str) -> anyhow::Result<ParsedMessage> {
        anyhow::bail!("model unavailable")
    }
}

fn test_patient() -> ParsedMessage {
    ParsedMessage {
        intent: Intent::AppointmentRequest,
        name: "Test Patient".to_string(),
        phone: "0412345678".to_string(),
        doctor: None,
        preferred_time: None,
        reason: None,
    }
}

fn context(extractor: Arc<dyn MessageExtractor>) -> Arc<AppContext> {
    let dir = std::env::temp_dir().join(format!("frontdesk_api_{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    Arc::new(AppContext {
        store: LogStore::new(dir.join("logs.json")),
        extractor,
    })
}

#[tokio::test]
async fn ingest_appends_exactly_one_record_and_echoes_parsed_data() {
    let ctx = context(Arc::new(FixedExtractor(test_patient())));
    let start = Utc::now().trunc_subsecs(3);

    let Json(body) = ingest_message(
        State(ctx.clone()),
        Json(IngestRequest {
            message: "I need to see Dr. Singh Monday".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(body["data"]["intent"], "appointment_request");
    assert_eq!(body["data"]["name"], "Test Patient");
    assert_eq!(body["data"]["phone"], "0412345678");

    let logs = ctx.store.list().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].original_message, "I need to see Dr. Singh Monday");
    assert_eq!(logs[0].parsed_data, test_patient());

    let stamped = chrono::DateTime::parse_from_rfc3339(&logs[0].timestamp).unwrap();
    assert!(stamped >= start);
}

#[tokio::test]
async fn failed_extraction_appends_nothing() {
    let ctx = context(Arc::new(FailingExtractor));

    let result = ingest_message(
        State(ctx.clone()),
        Json(IngestRequest {
            message: "hello?".to_string(),
        }),
    )
    .await;

    assert!(matches!(result, Err(ApiError::Extraction(_))));
    // No append happened, so the file was never created.
    assert!(!ctx.store.path().exists());
}

#[tokio::test]
async fn generate_test_data_fills_an_empty_store_with_ten_records() {
    let ctx = context(Arc::new(FailingExtractor));

    let status = generate_test_data(State(ctx.clone())).await.unwrap();
    assert_eq!(status, StatusCode::OK);

    let Json(logs) = list_logs(State(ctx)).await.unwrap();
    assert_eq!(logs.len(), 10);
    for log in &logs {
        assert_eq!(log.parsed_data.intent, Intent::AppointmentRequest);
        let phone = &log.parsed_data.phone;
        assert_eq!(phone.len(), 10);
        assert!(phone.starts_with("04"));
        assert!(phone.chars().all(|c| c.is_ascii_digit()));
    }
}

#[tokio::test]
async fn successive_generations_accumulate() {
    let ctx = context(Arc::new(FailingExtractor));

    generate_test_data(State(ctx.clone())).await.unwrap();
    generate_test_data(State(ctx.clone())).await.unwrap();

    let Json(logs) = list_logs(State(ctx)).await.unwrap();
    assert_eq!(logs.len(), 20);
}

#[tokio::test]
async fn delete_is_exact_match_and_idempotent() {
    let ctx = context(Arc::new(FixedExtractor(test_patient())));

    let mut victim = LogRecord::new("bye".to_string(), test_patient());
    victim.timestamp = "2024-01-01T00:00:00.000Z".to_string();
    let keeper = LogRecord::new("hi".to_string(), test_patient());
    ctx.store.append(&[victim, keeper.clone()]).await.unwrap();

    let status = delete_log(
        State(ctx.clone()),
        Path("2024-01-01T00:00:00.000Z".to_string()),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::OK);

    let Json(logs) = list_logs(State(ctx.clone())).await.unwrap();
    assert_eq!(logs, vec![keeper.clone()]);

    // Second delete of the same key: still 200, same final state.
    let status = delete_log(
        State(ctx.clone()),
        Path("2024-01-01T00:00:00.000Z".to_string()),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::OK);

    let Json(logs) = list_logs(State(ctx)).await.unwrap();
    assert_eq!(logs, vec![keeper]);
}

#[tokio::test]
async fn corrupt_store_fails_list_and_delete_but_ingest_recovers() {
    let ctx = context(Arc::new(FixedExtractor(test_patient())));
    std::fs::write(ctx.store.path(), "{definitely not json").unwrap();

    assert!(matches!(
        list_logs(State(ctx.clone())).await,
        Err(ApiError::Storage(_))
    ));
    assert!(matches!(
        delete_log(State(ctx.clone()), Path("x".to_string())).await,
        Err(ApiError::Storage(_))
    ));

    // Ingestion uses the forgiving pre-read: the corrupt contents are
    // replaced by a fresh single-record store.
    ingest_message(
        State(ctx.clone()),
        Json(IngestRequest {
            message: "start over".to_string(),
        }),
    )
    .await
    .unwrap();

    let Json(logs) = list_logs(State(ctx)).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].original_message, "start over");
}
