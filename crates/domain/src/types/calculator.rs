//! Calculator state and operation types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::impl_domain_string_conversions;

/// Binary operations applied between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percentage,
}

impl_domain_string_conversions!(BinaryOp {
    Add => "add",
    Subtract => "subtract",
    Multiply => "multiply",
    Divide => "divide",
    Percentage => "percentage",
});

impl BinaryOp {
    /// Symbol used when rendering expressions ("5 + 3").
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Percentage => "%",
        }
    }
}

/// Unary operations applied to the current display value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    Square,
    SquareRoot,
    ToggleSign,
    Reciprocal,
    Percent,
}

impl_domain_string_conversions!(UnaryOp {
    Square => "square",
    SquareRoot => "square_root",
    ToggleSign => "toggle_sign",
    Reciprocal => "reciprocal",
    Percent => "percent",
});

/// Full calculator state tuple.
///
/// Invariant: when `operation` is set, `previous_value` is set too.
/// Transitions are pure functions of `(state, input)`; the state never
/// mutates in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub previous_value: Option<f64>,
    pub operation: Option<BinaryOp>,
    pub display: String,
    pub waiting_for_new_value: bool,
    pub has_error: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            previous_value: None,
            operation: None,
            display: "0".to_string(),
            waiting_for_new_value: false,
            has_error: false,
        }
    }
}

impl CalculatorState {
    /// Current display parsed as a number; 0.0 when unparseable.
    pub fn display_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}

/// Immutable record of one completed binary evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub expression: String,
    pub result: String,
}

impl CalculationRecord {
    /// Create a record stamped with the current time.
    pub fn new(expression: String, result: String) -> Self {
        Self { id: Uuid::new_v4(), timestamp: Utc::now(), expression, result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = CalculatorState::default();
        assert_eq!(state.display, "0");
        assert!(state.previous_value.is_none());
        assert!(state.operation.is_none());
        assert!(!state.waiting_for_new_value);
        assert!(!state.has_error);
    }

    #[test]
    fn test_display_value_parses() {
        let state = CalculatorState { display: "12.5".to_string(), ..Default::default() };
        assert!((state.display_value() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_value_unparseable_is_zero() {
        let state = CalculatorState { display: "Erreur".to_string(), ..Default::default() };
        assert_eq!(state.display_value(), 0.0);
    }

    #[test]
    fn test_op_symbols() {
        assert_eq!(BinaryOp::Add.symbol(), "+");
        assert_eq!(BinaryOp::Divide.symbol(), "÷");
    }
}
