//! Result formatting
//!
//! Dual-mode rendering: very large or very small magnitudes switch to
//! scientific notation, everything else renders as a fixed decimal with
//! trailing zeros trimmed. The thresholds are the converter's own policy;
//! the calculator display deliberately uses different ones (see
//! `calculator::display`).

/// Magnitudes at or above this render in scientific notation.
pub const SCI_UPPER_THRESHOLD: f64 = 1e6;
/// Non-zero magnitudes below this render in scientific notation.
pub const SCI_LOWER_THRESHOLD: f64 = 1e-3;

const MAX_PRECISION: usize = 15;

/// Format a converted value at the given decimal precision (clamped to
/// [0, 15]).
pub fn format_result(value: f64, precision: u8) -> String {
    let precision = usize::from(precision).min(MAX_PRECISION);
    let magnitude = value.abs();

    if magnitude >= SCI_UPPER_THRESHOLD || (magnitude > 0.0 && magnitude < SCI_LOWER_THRESHOLD) {
        return format!("{value:.precision$e}");
    }

    let fixed = format!("{value:.precision$}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_magnitude_is_scientific() {
        assert_eq!(format_result(0.000_001_23, 2), "1.23e-6");
    }

    #[test]
    fn test_large_magnitude_is_scientific() {
        assert_eq!(format_result(1_234_567_890.0, 2), "1.23e9");
    }

    #[test]
    fn test_plain_decimal_rounding() {
        assert_eq!(format_result(123.456_789, 2), "123.46");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(format_result(1000.0, 4), "1000");
        assert_eq!(format_result(2.5, 4), "2.5");
    }

    #[test]
    fn test_zero_stays_plain() {
        assert_eq!(format_result(0.0, 4), "0");
    }

    #[test]
    fn test_threshold_boundaries() {
        // 0.001 is exactly at the lower bound: still plain.
        assert_eq!(format_result(0.001, 3), "0.001");
        // 999,999.99 stays plain; 1,000,000 flips to scientific.
        assert_eq!(format_result(999_999.0, 0), "999999");
        assert_eq!(format_result(1_000_000.0, 0), "1e6");
    }

    #[test]
    fn test_precision_clamped() {
        // Precision beyond 15 clamps instead of panicking or widening.
        let formatted = format_result(1.5, 40);
        assert_eq!(formatted, "1.5");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_result(-123.456, 2), "-123.46");
        assert_eq!(format_result(-0.000_001_23, 2), "-1.23e-6");
    }
}
