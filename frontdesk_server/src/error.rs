use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use frontdesk_store::StoreError;
use thiserror::Error;
use tracing::error;

/// Failures crossing the request boundary.
///
/// Both kinds reach the client as an opaque plain-text `500`; the
/// distinction is logged server-side only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Extraction failed: {0}")]
    Extraction(anyhow::Error),

    #[error("Log store failure: {0}")]
    Storage(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Extraction(e) => {
                error!("Extraction service call failed: {e:#}");
                "Error processing message."
            }
            Self::Storage(e) => {
                error!("Log store operation failed: {e}");
                "Failed to access logs."
            }
        };
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
