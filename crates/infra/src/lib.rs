//! # Daybook Infra
//!
//! Infrastructure adapters for the daybook engines.
//!
//! This crate implements the `StoragePort` seam defined in `daybook-core`:
//! - `MemoryStore` - process-local store for tests and ephemeral sessions
//! - `JsonFileStore` - durable single-file JSON store (the localStorage
//!   analogue the original widgets persisted into)

pub mod storage;

pub use storage::{JsonFileStore, MemoryStore};
