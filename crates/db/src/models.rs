//! History record types.

use serde::{Deserialize, Serialize};

use scenegen_core::scene::SceneDescriptor;

/// One recorded generation. Immutable once appended; there are no update
/// or delete operations.
///
/// Wire format uses camelCase for `imageUrl` and `createdAt`, matching
/// the stored history document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Strictly increasing, assigned as previous max id + 1 (1 when the
    /// ledger is empty). Never reused.
    pub id: i64,
    /// Original user prompt text.
    pub prompt: String,
    /// Normalized descriptor for this generation (value copy; may be a
    /// caller-supplied override rather than normalizer output).
    pub json: SceneDescriptor,
    /// URL or data URI of the produced image.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// ISO-8601 timestamp assigned at append time.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Fields the caller supplies when appending; `id` and `createdAt` are
/// assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewHistoryEntry {
    pub prompt: String,
    pub json: SceneDescriptor,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
