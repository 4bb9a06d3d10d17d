// crates/markup-gate-core/src/core/count.rs
// ============================================================================
// Module: Diagnostic Counter
// Description: Parsing of human-entered diagnostic count expressions.
// Purpose: Turn step phrases like "no" or "3" into expected counts.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Scenario steps express expected diagnostic counts in natural language:
//! the literal word `no`, or a number. Parsing is deliberately permissive,
//! malformed input degrades to zero instead of failing the step early; the
//! count comparison itself reports the mismatch.

// ============================================================================
// SECTION: Count Parsing
// ============================================================================

/// Parses a count expression into an expected diagnostic count.
///
/// The trimmed literal `no` (case sensitive) yields 0. Otherwise the
/// leading decimal digits are parsed; input without leading digits yields 0.
#[must_use]
pub fn parse_count(text: &str) -> u64 {
    let trimmed = text.trim();
    if trimmed == "no" {
        return 0;
    }
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::parse_count;

    #[test]
    fn literal_no_is_zero() {
        assert_eq!(parse_count("no"), 0);
        assert_eq!(parse_count("  no  "), 0);
    }

    #[test]
    fn plain_number_parses() {
        assert_eq!(parse_count("3"), 3);
        assert_eq!(parse_count("  7 "), 7);
    }

    #[test]
    fn non_numeric_degrades_to_zero() {
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("No"), 0);
    }

    #[test]
    fn leading_digits_win_over_trailing_text() {
        assert_eq!(parse_count("12 errors"), 12);
    }
}
