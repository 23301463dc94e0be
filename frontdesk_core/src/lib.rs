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
    clippy::missing_errors_doc
)]

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// System persona sent with every extraction request.
pub const RECEPTIONIST_SYSTEM_PROMPT: &str = "You are a helpful, polite medical receptionist AI assistant for an Australian GP clinic.
You answer basic questions, take appointment requests, and relay messages.
Never give medical advice. Be warm, professional, and respectful.";

/// Classification of an inbound patient message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    AppointmentRequest,
    Faq,
    MessageForDoctor,
}

/// Structured fields extracted from a patient message.
///
/// `intent`, `name` and `phone` are always present; the remaining fields
/// appear only when the patient mentioned them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedMessage {
    pub intent: Intent,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One stored unit: the raw message, its extraction, and a timestamp key.
///
/// Wire names are fixed by the persisted log file format. The timestamp is
/// the record's key; it is not unique by construction and colliding records
/// simply coexist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    #[serde(rename = "originalMessage")]
    pub original_message: String,
    #[serde(rename = "parsedData")]
    pub parsed_data: ParsedMessage,
}

impl LogRecord {
    /// Build a record stamped with the current UTC time (millisecond
    /// precision, `Z` suffix).
    #[must_use]
    pub fn new(original_message: String, parsed_data: ParsedMessage) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            original_message,
            parsed_data,
        }
    }
}

/// Converts unstructured patient text into a [`ParsedMessage`].
///
/// Implemented by the remote LLM provider in production and by fixtures in
/// tests. A single call per inbound message; implementations do not retry.
#[async_trait]
pub trait MessageExtractor: Send + Sync {
    async fn extract(&self, message: &str) -> anyhow::Result<ParsedMessage>;
}
