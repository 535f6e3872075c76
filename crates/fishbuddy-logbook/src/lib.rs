//! Fishing logbook: free-text catch records persisted as one JSON array
//! under a single key-value slot.

pub mod entry;
pub mod storage;
pub mod store;

pub use entry::{CatchLogEntry, EntryField};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{LoadState, LogbookStore, SharedLogbook};
