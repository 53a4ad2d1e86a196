//! Error types used throughout the daybook engines

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the daybook engines
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DaybookError {
    #[error("Cannot convert between categories: {from} -> {to}")]
    CategoryMismatch { from: String, to: String },

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DaybookError {
    /// True for failures the widget recovers from locally (error display
    /// state or cleared result) instead of propagating to the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero | Self::InvalidOperand(_) | Self::InvalidInput(_)
        )
    }
}

/// Result type alias for daybook operations
pub type Result<T> = std::result::Result<T, DaybookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization_tagged() {
        let err = DaybookError::CategoryMismatch {
            from: "length".to_string(),
            to: "weight".to_string(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "CategoryMismatch");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(DaybookError::DivisionByZero.is_recoverable());
        assert!(DaybookError::InvalidInput("NaN".into()).is_recoverable());
        assert!(!DaybookError::UnknownUnit("parsec".into()).is_recoverable());
        assert!(!DaybookError::Storage("disk".into()).is_recoverable());
    }
}
