//! Infrastructure port interfaces
//!
//! The engines persist their histories through this seam; adapters live in
//! `daybook-infra`. The store is a plain key-value surface with last-write-wins
//! semantics and no transactions, matching the durable storage the original
//! widgets were built against.

use daybook_domain::Result;

/// Durable key-value storage port.
///
/// All engine I/O is synchronous; implementations must be safe to share
/// across threads.
pub trait StoragePort: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing a missing key is not an
    /// error.
    fn remove(&self, key: &str) -> Result<()>;
}
