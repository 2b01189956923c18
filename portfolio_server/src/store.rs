//! Contact message storage.
//!
//! Messages live in memory behind an async `RwLock`. When a data file is
//! configured, the full list is rewritten after every mutation (write to a
//! sibling temp file, then rename) and reloaded on startup.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use portfolio_core::ContactRequest;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("corrupt message file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode messages: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Review state of a stored message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

impl MessageStatus {
    pub const ALL: [MessageStatus; 4] = [
        MessageStatus::New,
        MessageStatus::Read,
        MessageStatus::Replied,
        MessageStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::New => "new",
            MessageStatus::Read => "read",
            MessageStatus::Replied => "replied",
            MessageStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid status '{s}'"))
    }
}

/// A stored contact submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub status: MessageStatus,
}

impl ContactMessage {
    /// New message with a fresh v4 id, the given timestamp and status `new`.
    pub fn from_request(request: ContactRequest, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
            timestamp,
            status: MessageStatus::New,
        }
    }
}

/// Aggregate counters for the stats endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStats {
    pub total_messages: usize,
    pub messages_this_month: usize,
    pub last_updated: DateTime<Utc>,
}

/// Midnight UTC on the first day of `now`'s month.
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

#[derive(Clone, Default)]
pub struct MessageStore {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
    data_file: Option<PathBuf>,
}

impl MessageStore {
    /// Store that never touches the disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Store persisted to `path`; existing messages are loaded when the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let messages = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?;
            if raw.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            Vec::new()
        };
        info!(path = %path.display(), count = messages.len(), "loaded contact messages");
        Ok(Self {
            messages: Arc::new(RwLock::new(messages)),
            data_file: Some(path),
        })
    }

    pub fn data_file(&self) -> Option<&Path> {
        self.data_file.as_deref()
    }

    pub async fn insert(&self, message: ContactMessage) -> Result<ContactMessage, StoreError> {
        let mut messages = self.messages.write().await;
        messages.push(message.clone());
        if let Err(err) = self.persist(&messages).await {
            messages.pop();
            return Err(err);
        }
        debug!(id = %message.id, "stored contact message");
        Ok(message)
    }

    /// Up to `limit` messages, newest first.
    pub async fn list(&self, limit: usize) -> Vec<ContactMessage> {
        let messages = self.messages.read().await;
        let mut sorted: Vec<ContactMessage> = messages.clone();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted.truncate(limit);
        sorted
    }

    pub async fn get(&self, id: &str) -> Option<ContactMessage> {
        let messages = self.messages.read().await;
        messages.iter().find(|m| m.id == id).cloned()
    }

    /// Returns `Ok(false)` when no message has `id`.
    pub async fn set_status(&self, id: &str, status: MessageStatus) -> Result<bool, StoreError> {
        let mut messages = self.messages.write().await;
        let Some(index) = messages.iter().position(|m| m.id == id) else {
            return Ok(false);
        };
        let previous = messages[index].status;
        messages[index].status = status;
        if let Err(err) = self.persist(&messages).await {
            messages[index].status = previous;
            return Err(err);
        }
        debug!(%id, %status, "updated message status");
        Ok(true)
    }

    pub async fn stats(&self, now: DateTime<Utc>) -> MessageStats {
        let messages = self.messages.read().await;
        let start = month_start(now);
        MessageStats {
            total_messages: messages.len(),
            messages_this_month: messages.iter().filter(|m| m.timestamp >= start).count(),
            last_updated: now,
        }
    }

    async fn persist(&self, messages: &[ContactMessage]) -> Result<(), StoreError> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };
        let encoded = serde_json::to_vec_pretty(messages)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, encoded)
            .await
            .map_err(|source| StoreError::Write {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|source| StoreError::Write {
                path: path.clone(),
                source,
            })
    }
}
