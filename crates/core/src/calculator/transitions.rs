//! Pure calculator state transitions
//!
//! Each transition maps `(state, input)` to a new state and never mutates in
//! place. Domain failures (division by zero, invalid operands) are recovered
//! locally into the visible error state rather than surfaced to the caller;
//! the display shows the error sentinel until digit input starts over.

use daybook_domain::constants::{CALCULATOR_DISPLAY_MAX_LEN, CALCULATOR_ERROR_DISPLAY};
use daybook_domain::{BinaryOp, CalculatorState, DaybookError, Result, UnaryOp};

use super::display::format_display;

/// A binary evaluation that completed successfully; recorded into history
/// by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedCalculation {
    pub expression: String,
    pub result: String,
}

fn error_state() -> CalculatorState {
    CalculatorState {
        previous_value: None,
        operation: None,
        display: CALCULATOR_ERROR_DISPLAY.to_string(),
        waiting_for_new_value: true,
        has_error: true,
    }
}

/// Evaluate one binary operation.
fn evaluate(lhs: f64, op: BinaryOp, rhs: f64) -> Result<f64> {
    match op {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Subtract => Ok(lhs - rhs),
        BinaryOp::Multiply => Ok(lhs * rhs),
        BinaryOp::Divide => {
            if rhs == 0.0 {
                Err(DaybookError::DivisionByZero)
            } else {
                Ok(lhs / rhs)
            }
        }
        BinaryOp::Percentage => Ok(lhs * rhs / 100.0),
    }
}

/// Append a digit to the display.
///
/// Starts a fresh number when waiting for a new value or recovering from an
/// error; silently ignores digits once the display cap is reached.
pub fn input_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if !digit.is_ascii_digit() {
        return state.clone();
    }
    if state.has_error {
        return CalculatorState { display: digit.to_string(), ..CalculatorState::default() };
    }
    if state.waiting_for_new_value {
        return CalculatorState {
            display: digit.to_string(),
            waiting_for_new_value: false,
            ..state.clone()
        };
    }

    let display = if state.display == "0" {
        digit.to_string()
    } else if state.display.len() < CALCULATOR_DISPLAY_MAX_LEN {
        format!("{}{digit}", state.display)
    } else {
        state.display.clone()
    };
    CalculatorState { display, ..state.clone() }
}

/// Append the decimal point. A second point in the same number is ignored.
pub fn input_decimal(state: &CalculatorState) -> CalculatorState {
    if state.has_error {
        return CalculatorState { display: "0.".to_string(), ..CalculatorState::default() };
    }
    if state.waiting_for_new_value {
        return CalculatorState {
            display: "0.".to_string(),
            waiting_for_new_value: false,
            ..state.clone()
        };
    }
    if state.display.contains('.') || state.display.len() >= CALCULATOR_DISPLAY_MAX_LEN {
        return state.clone();
    }
    CalculatorState { display: format!("{}.", state.display), ..state.clone() }
}

/// Select a binary operation.
///
/// With no pending operand the display is stored; with a pending operation
/// and no new value entered yet the pending operation is replaced; otherwise
/// the pending operation is evaluated first (an operation chain).
pub fn apply_binary(
    state: &CalculatorState,
    op: BinaryOp,
) -> (CalculatorState, Option<CompletedCalculation>) {
    if state.has_error {
        return (state.clone(), None);
    }

    match (state.previous_value, state.operation) {
        (Some(_), Some(_)) if state.waiting_for_new_value => {
            // Operation re-selected before a new operand: replace it.
            (CalculatorState { operation: Some(op), ..state.clone() }, None)
        }
        (Some(previous), Some(pending)) => {
            let rhs = state.display_value();
            match evaluate(previous, pending, rhs) {
                Ok(result) => {
                    let completed = CompletedCalculation {
                        expression: format!(
                            "{} {} {}",
                            format_display(previous),
                            pending.symbol(),
                            format_display(rhs)
                        ),
                        result: format_display(result),
                    };
                    let next = CalculatorState {
                        previous_value: Some(result),
                        operation: Some(op),
                        display: format_display(result),
                        waiting_for_new_value: true,
                        has_error: false,
                    };
                    (next, Some(completed))
                }
                Err(_) => (error_state(), None),
            }
        }
        _ => {
            let next = CalculatorState {
                previous_value: Some(state.display_value()),
                operation: Some(op),
                display: state.display.clone(),
                waiting_for_new_value: true,
                has_error: false,
            };
            (next, None)
        }
    }
}

/// Evaluate the pending operation and clear it.
pub fn equals(state: &CalculatorState) -> (CalculatorState, Option<CompletedCalculation>) {
    if state.has_error {
        return (state.clone(), None);
    }
    let (Some(previous), Some(pending)) = (state.previous_value, state.operation) else {
        return (state.clone(), None);
    };

    let rhs = state.display_value();
    match evaluate(previous, pending, rhs) {
        Ok(result) => {
            let completed = CompletedCalculation {
                expression: format!(
                    "{} {} {}",
                    format_display(previous),
                    pending.symbol(),
                    format_display(rhs)
                ),
                result: format_display(result),
            };
            let next = CalculatorState {
                previous_value: None,
                operation: None,
                display: format_display(result),
                waiting_for_new_value: true,
                has_error: false,
            };
            (next, Some(completed))
        }
        Err(_) => (error_state(), None),
    }
}

/// Apply a unary operation to the display value.
///
/// Square root of a negative number and reciprocal of zero fail into the
/// same error state as division by zero.
pub fn apply_unary(state: &CalculatorState, op: UnaryOp) -> CalculatorState {
    if state.has_error {
        return state.clone();
    }
    let value = state.display_value();

    let result = match op {
        UnaryOp::Square => Ok(value * value),
        UnaryOp::SquareRoot => {
            if value < 0.0 {
                Err(DaybookError::InvalidOperand(
                    "square root of a negative number".to_string(),
                ))
            } else {
                Ok(value.sqrt())
            }
        }
        UnaryOp::ToggleSign => Ok(-value),
        UnaryOp::Reciprocal => {
            if value == 0.0 {
                Err(DaybookError::InvalidOperand("reciprocal of zero".to_string()))
            } else {
                Ok(1.0 / value)
            }
        }
        UnaryOp::Percent => Ok(value / 100.0),
    };

    match result {
        Ok(result) => CalculatorState {
            display: format_display(result),
            // Sign toggling keeps the number editable; the others finish it.
            waiting_for_new_value: op != UnaryOp::ToggleSign || state.waiting_for_new_value,
            ..state.clone()
        },
        Err(_) => error_state(),
    }
}

/// Remove the last display character; in error or waiting state, reset the
/// display to "0" instead.
pub fn backspace(state: &CalculatorState) -> CalculatorState {
    if state.has_error {
        return CalculatorState::default();
    }
    if state.waiting_for_new_value {
        return CalculatorState {
            display: "0".to_string(),
            waiting_for_new_value: false,
            ..state.clone()
        };
    }

    let mut display = state.display.clone();
    display.pop();
    if display.is_empty() || display == "-" {
        display = "0".to_string();
    }
    CalculatorState { display, ..state.clone() }
}

/// Reset everything.
pub fn clear(_state: &CalculatorState) -> CalculatorState {
    CalculatorState::default()
}
