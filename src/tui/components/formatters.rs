// Number and text formatters
//
// Shared formatting utilities for displaying values in the TUI.

use unicode_width::UnicodeWidthStr;

/// Format an integer with thousands grouping: 331000000 -> "331,000,000"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Truncate a string to a display width, appending an ellipsis when cut.
/// Width-aware so emoji and CJK names don't overflow card borders.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let budget = max_width.saturating_sub(1); // room for the ellipsis
    let mut used = 0;

    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }

    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
        assert_eq!(group_thousands(331_002_651), "331,002,651");
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_to_width("France", 10), "France");
        assert_eq!(truncate_to_width("United States Minor Outlying Islands", 10), "United St…");
    }

    #[test]
    fn truncation_respects_wide_characters() {
        // Each CJK character is two columns wide
        let truncated = truncate_to_width("日本国日本国", 5);
        assert_eq!(truncated, "日本…");
    }
}
