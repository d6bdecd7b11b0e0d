//! Incoming fund records - expected or received external contributions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether a contribution is still expected or has arrived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundStatus {
    /// Promised but not yet received
    #[default]
    Expected,
    /// Received in full
    Received,
}

/// An expected or received contribution toward the budget.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fund {
    /// Unique id, allocated from the creation time in epoch milliseconds
    pub id: i64,
    /// Where the money comes from (e.g., "Tax Refund")
    pub source: String,
    /// Amount in dollars
    pub amount: f64,
    /// When the contribution is expected
    #[serde(with = "super::opt_date")]
    pub date_expected: Option<NaiveDate>,
    /// When the contribution actually arrived
    #[serde(with = "super::opt_date")]
    pub date_received: Option<NaiveDate>,
    /// Expected or received
    pub status: FundStatus,
    /// Free-text notes
    pub notes: String,
    /// Creation timestamp; filled at the persistence boundary when absent
    pub created_at: Option<DateTime<Utc>>,
}
