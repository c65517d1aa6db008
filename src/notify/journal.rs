//! Append-only notification journal
//!
//! Each delivered notification is written as one JSON line (JSONL) and
//! flushed immediately. The journal is a record of alerts raised during
//! sessions; ledger state itself is not persisted.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NotificationSink;
use crate::error::{FinanceError, FinanceResult};
use crate::models::Notification;

/// One journal line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the notification was journaled (UTC)
    pub recorded_at: DateTime<Utc>,

    /// Session label, usually the authenticated user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,

    #[serde(flatten)]
    pub notification: Notification,
}

/// Writes notifications to the journal file
pub struct JournalSink {
    log_path: PathBuf,
    session: Option<String>,
}

impl JournalSink {
    /// Create a sink that appends to the given path
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            log_path,
            session: None,
        }
    }

    /// Tag every entry written by this sink with a session label
    pub fn for_session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    /// Append one notification
    pub fn append(&self, notification: &Notification) -> FinanceResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| FinanceError::Io(format!("Failed to open journal: {}", e)))?;

        let entry = JournalEntry {
            recorded_at: Utc::now(),
            session: self.session.clone(),
            notification: notification.clone(),
        };

        let json = serde_json::to_string(&entry)
            .map_err(|e| FinanceError::Json(format!("Failed to serialize journal entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| FinanceError::Io(format!("Failed to write journal entry: {}", e)))?;

        file.flush()
            .map_err(|e| FinanceError::Io(format!("Failed to flush journal: {}", e)))?;

        Ok(())
    }

    /// Read all journal entries, oldest first
    pub fn read_all(&self) -> FinanceResult<Vec<JournalEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| FinanceError::Io(format!("Failed to open journal: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                FinanceError::Io(format!("Failed to read journal line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: JournalEntry = serde_json::from_str(&line).map_err(|e| {
                FinanceError::Json(format!(
                    "Failed to parse journal entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries
    pub fn read_recent(&self, count: usize) -> FinanceResult<Vec<JournalEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }
}

impl NotificationSink for JournalSink {
    fn deliver(&mut self, notification: &Notification) {
        if let Err(e) = self.append(notification) {
            tracing::warn!(
                id = notification.id,
                path = %self.log_path.display(),
                error = %e,
                "failed to journal notification"
            );
        }
    }
}
