//! Calculator display rendering
//!
//! The calculator keeps its own scientific-notation thresholds (1e-6 /
//! 1e15), distinct from the converter's 1e-3 / 1e6. The two policies shipped
//! independently in the original widgets and unifying them would silently
//! change displayed output, so each engine documents and keeps its own.

use daybook_domain::CalculatorState;

/// Magnitudes at or above this render in scientific notation.
pub const SCI_UPPER_THRESHOLD: f64 = 1e15;
/// Non-zero magnitudes below this render in scientific notation.
pub const SCI_LOWER_THRESHOLD: f64 = 1e-6;

/// Render a computed value for the calculator display.
///
/// Integers render without a decimal part ("8", not "8.0"); everything else
/// is rounded to 8 decimals with trailing zeros trimmed, keeping results
/// within the 12-character display.
pub fn format_display(value: f64) -> String {
    if value.is_nan() || value.is_infinite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= SCI_UPPER_THRESHOLD || (magnitude > 0.0 && magnitude < SCI_LOWER_THRESHOLD) {
        return format!("{value:e}");
    }
    if value == value.trunc() {
        return format!("{value:.0}");
    }

    let fixed = format!("{value:.8}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Render the running expression shown above the display
/// (e.g. "12 +" while awaiting the second operand).
///
/// Pure projection of the state tuple; carries no invariants of its own.
pub fn display_expression(state: &CalculatorState) -> String {
    match (state.previous_value, state.operation) {
        (Some(previous), Some(op)) if state.waiting_for_new_value => {
            format!("{} {}", format_display(previous), op.symbol())
        }
        (Some(previous), Some(op)) => {
            format!("{} {} {}", format_display(previous), op.symbol(), state.display)
        }
        _ => state.display.clone(),
    }
}

#[cfg(test)]
mod tests {
    use daybook_domain::BinaryOp;

    use super::*;

    #[test]
    fn test_integer_renders_bare() {
        assert_eq!(format_display(8.0), "8");
        assert_eq!(format_display(-42.0), "-42");
    }

    #[test]
    fn test_fraction_trims_trailing_zeros() {
        assert_eq!(format_display(2.5), "2.5");
        assert_eq!(format_display(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_calculator_thresholds_differ_from_converter() {
        // 1e-4 is scientific for the converter but plain here.
        assert_eq!(format_display(0.0001), "0.0001");
        // Below 1e-6 the calculator flips too.
        assert_eq!(format_display(0.000_000_5), "5e-7");
        // Large values flip at 1e15, not 1e6.
        assert_eq!(format_display(2_000_000.0), "2000000");
        assert_eq!(format_display(1e15), "1e15");
    }

    #[test]
    fn test_expression_while_waiting() {
        let state = CalculatorState {
            previous_value: Some(12.0),
            operation: Some(BinaryOp::Add),
            display: "12".to_string(),
            waiting_for_new_value: true,
            has_error: false,
        };
        assert_eq!(display_expression(&state), "12 +");
    }

    #[test]
    fn test_expression_with_second_operand() {
        let state = CalculatorState {
            previous_value: Some(12.0),
            operation: Some(BinaryOp::Multiply),
            display: "7".to_string(),
            waiting_for_new_value: false,
            has_error: false,
        };
        assert_eq!(display_expression(&state), "12 × 7");
    }

    #[test]
    fn test_expression_without_pending_op_mirrors_display() {
        let state = CalculatorState { display: "99".to_string(), ..Default::default() };
        assert_eq!(display_expression(&state), "99");
    }
}
