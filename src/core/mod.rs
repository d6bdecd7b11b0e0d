//! Core business logic.
//!
//! Everything under this module is pure computation over the in-memory
//! collections: no I/O, no clocks (callers pass "today" in explicitly), and
//! no knowledge of the persistence layer. Derived values are recomputed from
//! current state on every call; they are views, not stored state.

/// Date-window filtering and exact-date bucketing of vendors
pub mod filter;
/// Incoming fund operations
pub mod fund;
/// Toggling single-column vendor sort
pub mod sort;
/// Budget, payments, funds and savings summaries
pub mod summary;
/// Checklist operations
pub mod todo;
/// Vendor CRUD and the completion/restore workflow
pub mod vendor;

/// Coerces a user-entered amount field to a number.
///
/// Malformed input is treated as zero rather than rejected; amount fields
/// never raise validation errors for non-numeric text. Entry forms live in
/// frontends embedding this crate, which call this before building a
/// `VendorDraft` or `FundDraft`; the report binary takes no numeric input.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("1380"), 1380.0);
        assert_eq!(parse_amount("  690.50 "), 690.5);
    }

    #[test]
    fn test_parse_amount_malformed_coerces_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12abc"), 0.0);
    }
}
