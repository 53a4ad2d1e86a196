//! Shared test helpers for `daybook-core` integration tests.
//!
//! Provides an in-memory storage mock so engine tests can exercise history
//! persistence deterministically, without touching the filesystem.

use std::collections::HashMap;
use std::sync::Arc;

use daybook_core::StoragePort;
use daybook_domain::Result as DomainResult;
use parking_lot::Mutex;

/// In-memory mock for `StoragePort`.
///
/// Keeps values in a plain map; `raw` lets tests inspect exactly what an
/// engine persisted.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty shared store.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create a shared store pre-seeded with one key.
    pub fn seeded(key: &str, value: &str) -> Arc<Self> {
        let store = Self::default();
        store.values.lock().insert(key.to_string(), value.to_string());
        Arc::new(store)
    }

    /// Raw stored value, for asserting on persisted JSON.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }
}

impl StoragePort for MemoryStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        self.values.lock().remove(key);
        Ok(())
    }
}
