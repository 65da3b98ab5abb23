//! The [`HistoryStore`] trait.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};

use crate::models::{HistoryEntry, NewHistoryEntry};

/// Errors from the history store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Append-only, insertion-ordered ledger of generation records.
///
/// Implementations must make id assignment and the recording of the entry
/// atomic relative to concurrent `append` calls: two concurrent appends
/// must never assign the same id or lose an entry. `list_all` must never
/// observe a partially constructed entry.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Assign the next id and timestamp, record the entry, and return it.
    async fn append(&self, new: NewHistoryEntry) -> Result<HistoryEntry, StoreError>;

    /// All entries in insertion order, oldest first.
    async fn list_all(&self) -> Result<Vec<HistoryEntry>, StoreError>;
}

/// Next id for a ledger snapshot: previous max id + 1, or 1 when empty.
///
/// Ids survive external truncation of the tail, so the max is taken over
/// all entries rather than assuming the last entry holds it.
pub(crate) fn next_id(entries: &[HistoryEntry]) -> i64 {
    entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
}

/// RFC 3339 timestamp with millisecond precision, e.g.
/// `2026-08-25T12:34:56.789Z`.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenegen_core::scene::SceneDescriptor;

    fn entry(id: i64) -> HistoryEntry {
        HistoryEntry {
            id,
            prompt: String::new(),
            json: SceneDescriptor::default(),
            image_url: String::new(),
            created_at: String::new(),
        }
    }

    #[test]
    fn next_id_on_empty_is_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_id(&[entry(1), entry(2), entry(3)]), 4);
    }

    #[test]
    fn next_id_survives_out_of_order_ids() {
        // External edits may leave the highest id mid-list.
        assert_eq!(next_id(&[entry(7), entry(3)]), 8);
    }
}
