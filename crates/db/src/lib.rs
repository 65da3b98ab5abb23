//! History ledger for generation records.
//!
//! [`HistoryStore`] is the seam the rest of the workspace depends on;
//! [`MemoryStore`] keeps entries for the process lifetime, and
//! [`JsonFileStore`] additionally writes through to a flat JSON document
//! (`{ "history": [...] }`, rewritten wholesale on each append).

pub mod file;
pub mod memory;
pub mod models;
pub mod store;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use models::{HistoryEntry, NewHistoryEntry};
pub use store::{HistoryStore, StoreError};
