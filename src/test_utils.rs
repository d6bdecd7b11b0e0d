//! Shared helpers for unit tests.

#![allow(clippy::unwrap_used)]

use crate::entities::{Fund, FundStatus, Vendor, next_record_id};
use chrono::NaiveDate;

/// A vendor with the given amounts, a fresh id, and defaults elsewhere.
pub fn test_vendor(name: &str, total: f64, paid: f64) -> Vendor {
    Vendor {
        id: next_record_id(),
        name: name.to_string(),
        total,
        paid,
        remaining: total - paid,
        ..Vendor::default()
    }
}

/// A fund with the given amount and status, a fresh id, and defaults
/// elsewhere.
pub fn test_fund(source: &str, amount: f64, status: FundStatus) -> Fund {
    Fund {
        id: next_record_id(),
        source: source.to_string(),
        amount,
        status,
        ..Fund::default()
    }
}

/// A calendar date that is known valid at the call site.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
