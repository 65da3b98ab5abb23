//! In-memory history store.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::{HistoryEntry, NewHistoryEntry};
use crate::store::{next_id, now_timestamp, HistoryStore, StoreError};

/// Process-lifetime ledger backed by a `Vec` behind an async mutex.
///
/// The mutex serializes id assignment and the push, so concurrent appends
/// cannot race.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for MemoryStore {
    async fn append(&self, new: NewHistoryEntry) -> Result<HistoryEntry, StoreError> {
        let mut entries = self.entries.lock().await;
        let entry = HistoryEntry {
            id: next_id(&entries),
            prompt: new.prompt,
            json: new.json,
            image_url: new.image_url,
            created_at: now_timestamp(),
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(self.entries.lock().await.clone())
    }
}
