//! Generation history collaborator.
//!
//! Receives one record per settled slot. Writes are fire-and-forget from
//! the orchestrator's point of view: failures are debug-logged and
//! swallowed, and must never affect the user-visible generation result.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// One settled slot, as reported to the collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub prompt: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// History write target.
#[async_trait]
pub trait HistorySink: Send + Sync {
    async fn record(&self, record: HistoryRecord) -> Result<()>;
}

/// Discards every record. The default when no history file is configured.
pub struct Noop;

#[async_trait]
impl HistorySink for Noop {
    async fn record(&self, _record: HistoryRecord) -> Result<()> {
        Ok(())
    }
}

/// Append-only JSONL file sink, one record per line.
pub struct JsonlHistory {
    path: PathBuf,
}

impl JsonlHistory {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl HistorySink for JsonlHistory {
    async fn record(&self, record: HistoryRecord) -> Result<()> {
        let line = serde_json::to_string(&record)?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening history file {}", self.path.display()))?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
