//! Plain serde data models for the tracker's record collections.
//!
//! Each record type lives in its own module. In-memory (and in the local
//! cache and export document) fields are camelCase JSON; the snake_case wire
//! shape lives separately in [`crate::store::wire`].

/// Personal savings singleton
pub mod finances;
/// Incoming fund records
pub mod fund;
/// Wedding checklist items
pub mod todo;
/// Vendor obligations, active and completed
pub mod vendor;

pub use finances::Finances;
pub use fund::{Fund, FundStatus};
pub use todo::Todo;
pub use vendor::{CompletedVendor, Party, Responsibility, Vendor, VendorStatus};

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Allocates a new record id from the current time in epoch milliseconds.
///
/// Ids double as creation timestamps. Two allocations in the same
/// millisecond are forced apart so the id stays usable as a primary key.
pub fn next_record_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    match LAST_ID.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(now.max(last + 1))
    }) {
        Ok(last) | Err(last) => now.max(last + 1),
    }
}

/// Serde helper for optional calendar dates.
///
/// Cached data written by earlier versions of the tracker stores unset dates
/// as `""` rather than `null`, and hand-edited values may not parse at all.
/// Both cases deserialize to `None`; dates serialize as `YYYY-MM-DD`.
pub(crate) mod opt_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse().ok()))
    }
}
