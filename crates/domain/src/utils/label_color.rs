//! Deterministic label color assignment.
//!
//! Labels have no stored color; the UI derives one from the label id so the
//! same label always renders the same color, on every device, without any
//! coordination. The hash is a character-code sum mixed with the 32-bit
//! golden-ratio constant.

/// Fixed palette the hash indexes into.
pub const LABEL_PALETTE: [&str; 8] = [
    "#ef4444", // red
    "#f97316", // orange
    "#eab308", // yellow
    "#22c55e", // green
    "#06b6d4", // cyan
    "#3b82f6", // blue
    "#8b5cf6", // violet
    "#ec4899", // pink
];

const GOLDEN_RATIO_32: u32 = 0x9E37_79B1;

/// Hash an opaque label id into a palette index.
pub fn label_color_index(id: &str) -> usize {
    let sum = id.chars().fold(0u32, |acc, c| acc.wrapping_add(c as u32));
    let mixed = sum.wrapping_mul(GOLDEN_RATIO_32);
    (mixed >> 16) as usize % LABEL_PALETTE.len()
}

/// Resolve an opaque label id to its palette color.
pub fn label_color(id: &str) -> &'static str {
    LABEL_PALETTE[label_color_index(id)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(label_color("groceries"), label_color("groceries"));
        assert_eq!(label_color_index("work"), label_color_index("work"));
    }

    #[test]
    fn test_index_in_palette_range() {
        for id in ["", "a", "work", "a-very-long-label-identifier", "émoji ☀"] {
            assert!(label_color_index(id) < LABEL_PALETTE.len());
        }
    }

    #[test]
    fn test_spreads_across_palette() {
        let ids = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"];
        let distinct: std::collections::HashSet<_> =
            ids.iter().map(|id| label_color_index(id)).collect();
        assert!(distinct.len() > 2, "hash should not collapse to a couple of buckets");
    }
}
