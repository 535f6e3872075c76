//! In-memory ordered logbook mirrored to a single storage slot.
//!
//! Every mutation rewrites the whole collection. Position is the only
//! handle to an entry, so removing one shifts every later index down.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::entry::CatchLogEntry;
use crate::storage::{KeyValueStore, StorageError};

/// Outcome of hydrating the store from its slot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    /// Slot read and parsed (or absent, which means an empty logbook)
    Loaded,
    /// Slot could not be read or parsed; the collection starts empty
    Failed(String),
}

/// Store shared between concurrent mutation paths; the mutex serialises writers.
pub type SharedLogbook<S> = Arc<Mutex<LogbookStore<S>>>;

#[derive(Debug)]
pub struct LogbookStore<S: KeyValueStore> {
    storage: S,
    key: String,
    entries: Vec<CatchLogEntry>,
    state: LoadState,
    dirty: bool,
    /// Set when the slot exists but could not be read; writes are held back
    unreadable: bool,
}

impl<S: KeyValueStore> LogbookStore<S> {
    /// Create an unhydrated store over `storage`, persisting under `key`.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            entries: Vec::new(),
            state: LoadState::NotLoaded,
            dirty: false,
            unreadable: false,
        }
    }

    /// Create and hydrate in one step.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, key);
        store.load();
        store
    }

    pub fn into_shared(self) -> SharedLogbook<S> {
        Arc::new(Mutex::new(self))
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// A missing slot is an empty logbook. An unparseable slot is copied to
    /// `<key>.corrupt` before the collection is treated as empty, so later
    /// writes cannot destroy the only copy. A slot that cannot be read at
    /// all is never overwritten until a later `load` succeeds.
    pub fn load(&mut self) -> &LoadState {
        self.unreadable = false;
        self.state = match self.storage.get(&self.key) {
            Ok(None) => {
                self.entries.clear();
                LoadState::Loaded
            }
            Ok(Some(raw)) => match serde_json::from_str::<Option<Vec<CatchLogEntry>>>(&raw) {
                Ok(entries) => {
                    self.entries = entries.unwrap_or_default();
                    tracing::info!("Loaded {} log entries", self.entries.len());
                    LoadState::Loaded
                }
                Err(e) => {
                    tracing::error!("Failed to parse logs from storage: {}", e);
                    self.back_up_corrupt(&raw);
                    self.entries.clear();
                    LoadState::Failed(e.to_string())
                }
            },
            Err(e) => {
                tracing::error!("Failed to load logs from storage: {}", e);
                self.unreadable = true;
                self.entries.clear();
                LoadState::Failed(e.to_string())
            }
        };
        self.dirty = false;
        &self.state
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    pub fn entries(&self) -> &[CatchLogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatchLogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the last write failed and memory is ahead of storage.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Add `entry` at the end and rewrite the slot.
    pub fn append(&mut self, entry: CatchLogEntry) {
        self.ensure_loaded();
        self.entries.push(entry);
        self.persist();
    }

    /// Remove the entry at `index` and rewrite the slot.
    ///
    /// An out-of-range index changes nothing and writes nothing.
    pub fn remove_at(&mut self, index: usize) -> Option<CatchLogEntry> {
        self.ensure_loaded();
        if index >= self.entries.len() {
            tracing::debug!(
                "Ignoring delete at {} (only {} entries)",
                index,
                self.entries.len()
            );
            return None;
        }
        let removed = self.entries.remove(index);
        self.persist();
        Some(removed)
    }

    fn ensure_loaded(&mut self) {
        if self.state == LoadState::NotLoaded {
            self.load();
        }
    }

    /// Full-snapshot write. Failures are logged and leave memory as-is.
    fn persist(&mut self) {
        if self.unreadable {
            tracing::warn!("Not overwriting unreadable slot {}", self.key);
            self.dirty = true;
            return;
        }
        match self.write_snapshot() {
            Ok(()) => self.dirty = false,
            Err(e) => {
                tracing::error!("Failed to save logs to storage: {}", e);
                self.dirty = true;
            }
        }
    }

    fn write_snapshot(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.entries)?;
        self.storage.set(&self.key, &json)
    }

    fn back_up_corrupt(&self, raw: &str) {
        let backup_key = format!("{}.corrupt", self.key);
        match self.storage.set(&backup_key, raw) {
            Ok(()) => tracing::warn!("Kept unreadable logbook data under {}", backup_key),
            Err(e) => tracing::error!("Failed to back up unreadable logbook data: {}", e),
        }
    }
}
