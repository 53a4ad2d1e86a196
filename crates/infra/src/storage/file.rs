//! JSON-file storage adapter
//!
//! One flat JSON object per store file, keys mapping to string values. This
//! mirrors the durable key-value surface the original widgets persisted
//! into: no transactions, last write wins, and an unreadable file is treated
//! as empty rather than fatal.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use daybook_core::StoragePort;
use daybook_domain::{DaybookError, Result};
use parking_lot::Mutex;
use tracing::warn;

/// Durable `StoragePort` implementation backed by a single JSON file.
///
/// The full map is loaded at open and rewritten on every mutation. The
/// stores hold at most a handful of small histories, so write-through keeps
/// the on-disk state consistent without any coordination.
pub struct JsonFileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating parent directories as needed.
    /// A missing or unreadable file starts empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| DaybookError::Storage(err.to_string()))?;
        }

        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Store file is unreadable; starting empty");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Ok(Self { path, values: Mutex::new(values) })
    }

    fn flush(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(values)
            .map_err(|err| DaybookError::Storage(err.to_string()))?;
        fs::write(&self.path, raw).map_err(|err| DaybookError::Storage(err.to_string()))
    }
}

impl StoragePort for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock();
        values.insert(key.to_string(), value.to_string());
        self.flush(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.lock();
        if values.remove(key).is_some() {
            return self.flush(&values);
        }
        Ok(())
    }
}
