//! Bounded, persisted operation history
//!
//! Every widget engine keeps a newest-first list of past operations, capped
//! at [`HISTORY_CAP`] entries and persisted as a JSON array under a fixed
//! storage key. Eviction is truncation: once the cap is exceeded the oldest
//! entries are silently dropped. Corrupt or unparseable stored data is
//! treated as empty history, never a fatal error.

use std::sync::Arc;

use daybook_domain::constants::HISTORY_CAP;
use daybook_domain::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::ports::StoragePort;

/// In-memory capped list, newest entries first.
#[derive(Debug, Clone)]
pub struct BoundedHistory<T> {
    entries: Vec<T>,
    cap: usize,
}

impl<T> Default for BoundedHistory<T> {
    fn default() -> Self {
        Self::new(HISTORY_CAP)
    }
}

impl<T> BoundedHistory<T> {
    /// Create an empty history with the given cap.
    pub fn new(cap: usize) -> Self {
        Self { entries: Vec::new(), cap }
    }

    /// Prepend an entry, evicting the oldest entries beyond the cap.
    pub fn push(&mut self, entry: T) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.cap);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> From<Vec<T>> for BoundedHistory<T> {
    fn from(mut entries: Vec<T>) -> Self {
        entries.truncate(HISTORY_CAP);
        Self { entries, cap: HISTORY_CAP }
    }
}

/// A [`BoundedHistory`] persisted through the storage port under a fixed key.
///
/// Writes go through on every change (last write wins); reads happen once at
/// construction.
pub struct HistoryStore<T> {
    key: &'static str,
    store: Arc<dyn StoragePort>,
    history: BoundedHistory<T>,
}

impl<T> HistoryStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load the history stored under `key`, treating missing or corrupt data
    /// as empty.
    pub fn open(store: Arc<dyn StoragePort>, key: &'static str) -> Result<Self> {
        let history = match store.get(key)? {
            Some(raw) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(entries) => BoundedHistory::from(entries),
                Err(err) => {
                    warn!(key, error = %err, "Stored history is unreadable; starting empty");
                    BoundedHistory::default()
                }
            },
            None => BoundedHistory::default(),
        };
        Ok(Self { key, store, history })
    }

    /// Prepend an entry and persist the updated list.
    pub fn record(&mut self, entry: T) -> Result<()> {
        self.history.push(entry);
        self.persist()
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[T] {
        self.history.entries()
    }

    /// Drop all entries and remove the stored value.
    pub fn clear(&mut self) -> Result<()> {
        self.history.clear();
        self.store.remove(self.key)
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(self.history.entries())
            .map_err(|err| daybook_domain::DaybookError::Storage(err.to_string()))?;
        self.store.set(self.key, &raw)
    }
}
