//! Vendor records - payable obligations to wedding service providers.
//!
//! A vendor carries a contracted total, the amount paid so far and the
//! derived remainder, plus who paid, who owes the rest, and which household
//! bucket owns the obligation. Vendors move between the active collection
//! and a completed collection that adds a completion date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Who is expected to settle an outstanding balance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Party {
    /// The couple jointly
    #[default]
    Us,
    /// The parents
    Parents,
    /// Michaela individually
    Michaela,
    /// Arrington individually
    Arrington,
}

/// Household-internal ownership bucket used for the couple's sub-budget.
///
/// Distinct from [`Party`]: responsibility says whose budget an obligation
/// belongs to, not who physically disburses the payment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Responsibility {
    /// The couple jointly
    #[default]
    Us,
    /// Michaela individually
    Michaela,
    /// The parents
    Parents,
}

impl Responsibility {
    /// The raw string form, as stored on the wire and used for sorting.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us => "Us",
            Self::Michaela => "Michaela",
            Self::Parents => "Parents",
        }
    }

    /// Whether this bucket counts toward the couple's personal exposure.
    pub const fn is_ours(self) -> bool {
        matches!(self, Self::Us | Self::Michaela)
    }
}

/// Workflow status of a vendor obligation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    /// Not yet contacted
    #[default]
    Pending,
    /// Initial contact made
    Contacted,
    /// Booking confirmed
    Confirmed,
    /// Fully paid
    Paid,
    /// Payment past due
    Overdue,
    /// Booking cancelled
    Cancelled,
}

/// An active vendor obligation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vendor {
    /// Unique id, allocated from the creation time in epoch milliseconds
    pub id: i64,
    /// Vendor name (e.g., "Cake: Abundantly Sweets")
    pub name: String,
    /// Contracted cost in dollars
    pub total: f64,
    /// Amount paid to date in dollars
    pub paid: f64,
    /// Outstanding balance; always `total - paid`, never edited directly
    pub remaining: f64,
    /// Free-text note on who made past payments
    pub paid_by: String,
    /// Who owes the remainder
    pub remaining_by: Party,
    /// Ownership bucket for the couple's sub-budget
    pub responsibility: Responsibility,
    /// Payment due date; `None` means "TBD"
    #[serde(with = "super::opt_date")]
    pub due_date: Option<NaiveDate>,
    /// Workflow status
    pub status: VendorStatus,
    /// Free-text notes
    pub notes: String,
    /// Invoice or vendor website link
    pub link: String,
    /// Creation timestamp; filled at the persistence boundary when absent
    pub created_at: Option<DateTime<Utc>>,
}

impl Vendor {
    /// Re-derives `remaining` from `total` and `paid`.
    ///
    /// Must be called after any mutation of either amount; `remaining` is a
    /// stored derivation, not an independent field.
    pub fn recompute_remaining(&mut self) {
        self.remaining = self.total - self.paid;
    }
}

/// A vendor that has been marked complete.
///
/// Carries the full vendor record plus the completion date. A vendor id
/// exists in at most one of the active and completed collections at a time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompletedVendor {
    /// The vendor record, unchanged from when it was active
    #[serde(flatten)]
    pub vendor: Vendor,
    /// Date the vendor was marked complete
    #[serde(rename = "completedDate")]
    pub completed_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_recompute_remaining() {
        let mut vendor = Vendor {
            total: 1380.0,
            paid: 690.0,
            ..Vendor::default()
        };
        vendor.recompute_remaining();
        assert_eq!(vendor.remaining, 690.0);

        vendor.paid = 1380.0;
        vendor.recompute_remaining();
        assert_eq!(vendor.remaining, 0.0);
    }

    #[test]
    fn test_vendor_json_shape_is_camel_case() {
        let vendor = Vendor {
            id: 5,
            name: "Cake".to_string(),
            total: 1380.0,
            paid: 690.0,
            remaining: 690.0,
            paid_by: "Us".to_string(),
            due_date: Some(NaiveDate::from_ymd_opt(2025, 9, 4).unwrap()),
            ..Vendor::default()
        };
        let json = serde_json::to_value(&vendor).unwrap();
        assert_eq!(json["paidBy"], "Us");
        assert_eq!(json["remainingBy"], "Us");
        assert_eq!(json["dueDate"], "2025-09-04");
        assert_eq!(json["status"], "pending");
        assert!(json.get("paid_by").is_none());
    }

    #[test]
    fn test_empty_string_due_date_reads_as_none() {
        let vendor: Vendor =
            serde_json::from_str(r#"{"id":1,"name":"DJ","dueDate":""}"#).unwrap();
        assert_eq!(vendor.due_date, None);
    }

    #[test]
    fn test_unparseable_due_date_reads_as_none() {
        let vendor: Vendor =
            serde_json::from_str(r#"{"id":1,"name":"DJ","dueDate":"sometime"}"#).unwrap();
        assert_eq!(vendor.due_date, None);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let vendor: Vendor = serde_json::from_str(r#"{"id":1,"name":"Makeup"}"#).unwrap();
        assert_eq!(vendor.total, 0.0);
        assert_eq!(vendor.remaining_by, Party::Us);
        assert_eq!(vendor.responsibility, Responsibility::Us);
        assert_eq!(vendor.status, VendorStatus::Pending);
        assert_eq!(vendor.due_date, None);
    }

    #[test]
    fn test_completed_vendor_flattens_fields() {
        let completed = CompletedVendor {
            vendor: Vendor {
                id: 7,
                name: "Violin".to_string(),
                ..Vendor::default()
            },
            completed_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        };
        let json = serde_json::to_value(&completed).unwrap();
        assert_eq!(json["name"], "Violin");
        assert_eq!(json["completedDate"], "2025-08-01");

        let back: CompletedVendor = serde_json::from_value(json).unwrap();
        assert_eq!(back, completed);
    }
}
