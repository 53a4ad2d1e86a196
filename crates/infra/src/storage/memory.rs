//! In-memory storage adapter

use std::collections::HashMap;

use daybook_core::StoragePort;
use daybook_domain::Result;
use parking_lot::RwLock;

/// Process-local `StoragePort` implementation.
///
/// Nothing survives the process; useful for tests and for running the
/// engines without a durable backing file.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.write().remove(key);
        Ok(())
    }
}
