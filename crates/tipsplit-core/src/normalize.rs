//! # Amount Normalization
//!
//! Turns user-typed bill text into something safe to parse as a number.
//!
//! ## The Separator Problem
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Mobile keyboards differ by locale:                                     │
//! │                                                                         │
//! │    "100.50"  ← dot-decimal keyboard                                     │
//! │    "100,50"  ← comma-decimal keyboard (same amount!)                    │
//! │    "100,"    ← user tapped the separator and stopped                    │
//! │                                                                         │
//! │  The calculator accepts all three. Normalization rewrites them to a    │
//! │  single canonical form ("100.50", "100.50", "100") before parsing.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::normalize::{normalize_amount, parse_amount};
//!
//! assert_eq!(normalize_amount("100,50"), "100.50");
//! assert_eq!(parse_amount("100,50").unwrap(), 100.5);
//! ```

use crate::error::{TipError, TipResult};

/// True when the first occurrence of `sep` is the string's last character.
///
/// The trailing-separator rules below key off the *first* occurrence on
/// purpose: "12," is a typo to repair, but in "1,2," the first comma is
/// interior, so the string is handed to the replace-all rule instead and the
/// downstream numeric parse rejects it.
fn first_occurrence_is_last(s: &str, sep: char) -> bool {
    s.find(sep).is_some_and(|idx| idx + sep.len_utf8() == s.len())
}

/// Normalizes a user-typed amount string for numeric parsing.
///
/// ## Rules (ordered, first match wins)
/// 1. First `,` is the last character → drop every `,` (trailing typo)
/// 2. First `.` is the last character → drop every `.` (trailing typo)
/// 3. String contains `,` anywhere → replace every `,` with `.`
/// 4. Otherwise → returned unchanged
///
/// This is **not** a validator: "1.2.3" and "12a" pass through untouched and
/// are rejected later by the numeric parse. Any string, including the empty
/// string, is accepted and returned.
///
/// ## Example
/// ```rust
/// use tipsplit_core::normalize::normalize_amount;
///
/// assert_eq!(normalize_amount("12,"), "12");
/// assert_eq!(normalize_amount("12,5"), "12.5");
/// assert_eq!(normalize_amount("12.5"), "12.5");
/// ```
pub fn normalize_amount(raw: &str) -> String {
    if first_occurrence_is_last(raw, ',') {
        raw.replace(',', "")
    } else if first_occurrence_is_last(raw, '.') {
        raw.replace('.', "")
    } else if raw.contains(',') {
        raw.replace(',', ".")
    } else {
        raw.to_string()
    }
}

/// Parses a user-typed amount string into a number.
///
/// The single place in the crate where bill text becomes a value: normalize,
/// trim, then parse as `f64`.
///
/// ## Errors
/// Returns [`TipError::InvalidAmount`] carrying the original input when the
/// normalized text is not a valid numeric literal.
///
/// ## Example
/// ```rust
/// use tipsplit_core::normalize::parse_amount;
///
/// assert_eq!(parse_amount("100,50").unwrap(), 100.5);
/// assert!(parse_amount("1,2,3").is_err());
/// ```
pub fn parse_amount(raw: &str) -> TipResult<f64> {
    normalize_amount(raw)
        .trim()
        .parse::<f64>()
        .map_err(|_| TipError::InvalidAmount {
            input: raw.to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_unchanged() {
        assert_eq!(normalize_amount(""), "");
    }

    #[test]
    fn test_trailing_separator_stripped() {
        // Trailing rules win even though the string also "contains" a comma
        assert_eq!(normalize_amount("12,"), "12");
        assert_eq!(normalize_amount("12."), "12");
    }

    #[test]
    fn test_comma_becomes_dot() {
        assert_eq!(normalize_amount("12,5"), "12.5");
        assert_eq!(normalize_amount("0,99"), "0.99");
    }

    #[test]
    fn test_dot_decimal_unchanged() {
        assert_eq!(normalize_amount("12.5"), "12.5");
        assert_eq!(normalize_amount("100"), "100");
    }

    #[test]
    fn test_not_a_validator() {
        // Multiple separators pass through; the numeric parse rejects them
        assert_eq!(normalize_amount("1,2,3"), "1.2.3");
        assert!("1.2.3".parse::<f64>().is_err());
    }

    #[test]
    fn test_interior_comma_with_trailing_comma() {
        // First comma is interior, so the trailing rule does not apply
        assert_eq!(normalize_amount("1,2,"), "1.2.");
    }

    #[test]
    fn test_lone_separator() {
        assert_eq!(normalize_amount(","), "");
        assert_eq!(normalize_amount("."), "");
    }

    #[test]
    fn test_idempotent_without_trailing_separator() {
        for s in ["", "12.5", "12,5", "1,2,3", "100", "abc"] {
            let once = normalize_amount(s);
            assert_eq!(normalize_amount(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100,50").unwrap(), 100.5);
        assert_eq!(parse_amount("100.50").unwrap(), 100.5);
        assert_eq!(parse_amount("100,").unwrap(), 100.0);
        assert_eq!(parse_amount(" 100 ").unwrap(), 100.0);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        for s in ["", "1,2,3", "12a", "--5", "12..5"] {
            let err = parse_amount(s).unwrap_err();
            assert!(
                matches!(&err, TipError::InvalidAmount { input } if input == s),
                "input: {s:?}"
            );
        }
    }

    // Property-based tests using proptest
    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// Normalization is idempotent for inputs without a trailing separator
        proptest! {
            #[test]
            fn prop_normalize_idempotent(s in "[0-9,.]{0,12}") {
                prop_assume!(!s.ends_with(',') && !s.ends_with('.'));
                let once = normalize_amount(&s);
                prop_assert_eq!(normalize_amount(&once), once);
            }
        }

        /// Normalization only touches separators; digits pass through intact
        proptest! {
            #[test]
            fn prop_digits_preserved(s in "[0-9,.]{0,12}") {
                let digits = |t: &str| t.chars().filter(char::is_ascii_digit).collect::<String>();
                prop_assert_eq!(digits(&normalize_amount(&s)), digits(&s));
            }
        }
    }
}
