//! # Daybook Domain
//!
//! Business domain types and models for the daybook engines.
//!
//! This crate contains:
//! - Domain data types (units, calendar cells, calculator state, timer data)
//! - Domain error types and Result definitions
//! - Domain constants (history caps, storage keys, display limits)
//! - Small domain utilities (label color hashing)
//!
//! ## Architecture
//! - No dependencies on other daybook crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
// Re-export label color utilities
pub use utils::label_color::{label_color, label_color_index};
