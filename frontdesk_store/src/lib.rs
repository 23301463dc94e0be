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

//! File-backed log store.
//!
//! The whole record sequence lives in a single pretty-printed JSON array.
//! Every operation is a whole-file read-modify-write; there is no locking,
//! so concurrent mutations are last-writer-wins.

use frontdesk_core::LogRecord;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid log file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Durable storage for the full [`LogRecord`] sequence.
///
/// Read policy is deliberately asymmetric: [`LogStore::append`] treats a
/// missing, empty, or unparseable file as an empty store, while
/// [`LogStore::list`] and [`LogStore::delete_by_timestamp`] surface read and
/// parse failures to the caller. Both behaviors are part of the contract.
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read and parse the full record sequence. Strict: a missing file or
    /// invalid JSON is an error, with no empty-array fallback.
    pub async fn list(&self) -> Result<Vec<LogRecord>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Append records at the end of the sequence and rewrite the file.
    ///
    /// The pre-read is forgiving: missing, empty, or corrupt contents are
    /// treated as an empty store, so an append always goes through unless
    /// the write itself fails.
    pub async fn append(&self, records: &[LogRecord]) -> Result<()> {
        let mut logs = self.read_or_default().await;
        logs.extend_from_slice(records);
        self.write_all(&logs).await?;
        debug!(
            "Appended {} record(s), store now holds {}",
            records.len(),
            logs.len()
        );
        Ok(())
    }

    /// Remove every record whose timestamp equals `timestamp` exactly and
    /// rewrite the file. Returns the number of records removed; zero matches
    /// is a successful no-op. Unlike [`LogStore::append`], the pre-read is
    /// strict and propagates read or parse failures.
    pub async fn delete_by_timestamp(&self, timestamp: &str) -> Result<usize> {
        let mut records = self.list().await?;
        let before = records.len();
        records.retain(|r| r.timestamp != timestamp);
        let removed = before - records.len();
        self.write_all(&records).await?;
        Ok(removed)
    }

    async fn read_or_default(&self) -> Vec<LogRecord> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if !raw.trim().is_empty() => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!("Failed to parse {}: {e}, starting fresh", self.path.display());
                    Vec::new()
                }
            },
            Ok(_) => Vec::new(),
            Err(e) => {
                debug!("No existing log file at {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    async fn write_all(&self, records: &[LogRecord]) -> Result<()> {
        let body = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }
}
