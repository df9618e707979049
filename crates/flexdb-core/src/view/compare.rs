//! Value comparison for the record-list view.
//!
//! Stored values are raw strings whatever the declared field type, so the
//! ordering is decided per comparison:
//!
//! 1. Both sides parse fully as finite numbers — numeric order.
//! 2. Otherwise — case-folded text order.
//!
//! Mixed and non-finite parses stay in text ordering, keeping the
//! comparator total. Missing values enter as empty strings.

use std::cmp::Ordering;

/// Total comparator for two stored field values.
#[must_use]
pub fn field_value_cmp(left: &str, right: &str) -> Ordering {
    if let (Some(a), Some(b)) = (parse_number(left), parse_number(right))
        && let Some(ordering) = a.partial_cmp(&b)
    {
        return ordering;
    }

    fold_ci(left).cmp(&fold_ci(right))
}

/// Case-insensitive substring match on raw stored values.
#[must_use]
pub fn text_contains_ci(haystack: &str, needle: &str) -> bool {
    fold_ci(haystack).contains(&fold_ci(needle))
}

// Full-string numeric parse. Empty and non-finite inputs are rejected so
// they fall back to text ordering.
fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

// ASCII fast path; Unicode falls back to to_lowercase.
fn fold_ci(s: &str) -> String {
    if s.is_ascii() {
        s.to_ascii_lowercase()
    } else {
        s.to_lowercase()
    }
}

///
/// TESTS
///
