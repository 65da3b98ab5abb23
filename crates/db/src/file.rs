//! JSON-file-backed history store.
//!
//! The on-disk layout is a single document `{ "history": [...] }`,
//! rewritten wholesale on each append (not append-only on disk). Existing
//! entries are loaded once at construction, so the id sequence continues
//! across restarts.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::{HistoryEntry, NewHistoryEntry};
use crate::store::{next_id, now_timestamp, HistoryStore, StoreError};

/// On-disk document shape.
#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryDocument {
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

/// History ledger with synchronous write-through to a flat JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<Vec<HistoryEntry>>,
}

impl JsonFileStore {
    /// Open the store, loading any existing document at `path`.
    ///
    /// A missing file is treated as an empty ledger; a malformed document
    /// is an error (refusing to silently clobber unreadable history).
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let doc: HistoryDocument = serde_json::from_slice(&bytes)?;
                doc.history
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "Opened history file");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Serialize the full document and overwrite the backing file.
    async fn write_document(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        let doc = serde_json::json!({ "history": entries });
        let bytes = serde_json::to_vec_pretty(&doc)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for JsonFileStore {
    async fn append(&self, new: NewHistoryEntry) -> Result<HistoryEntry, StoreError> {
        // Id assignment and the write-through happen under one lock so
        // concurrent appends cannot assign duplicate ids or lose entries.
        let mut entries = self.entries.lock().await;
        let entry = HistoryEntry {
            id: next_id(&entries),
            prompt: new.prompt,
            json: new.json,
            image_url: new.image_url,
            created_at: now_timestamp(),
        };
        entries.push(entry.clone());

        if let Err(e) = self.write_document(&entries).await {
            // Keep memory and disk consistent: roll back the push.
            entries.pop();
            return Err(e);
        }

        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(self.entries.lock().await.clone())
    }
}
