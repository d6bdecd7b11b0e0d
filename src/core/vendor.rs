//! Vendor operations - create, edit, delete, and the completion workflow.
//!
//! All operations take the collections by mutable reference and uphold two
//! invariants: `remaining == total - paid` after every create or edit, and a
//! vendor id exists in at most one of the active and completed collections.

use crate::entities::{CompletedVendor, Vendor, next_record_id};
use crate::errors::{Error, Result};
use chrono::{NaiveDate, Utc};

/// Fields collected from the add/edit vendor form.
///
/// `remaining` is deliberately absent: it is always derived.
#[derive(Debug, Clone, Default)]
pub struct VendorDraft {
    /// Vendor name, required non-empty
    pub name: String,
    /// Contracted cost
    pub total: f64,
    /// Amount paid to date
    pub paid: f64,
    /// Free-text note on who made past payments
    pub paid_by: String,
    /// Who owes the remainder
    pub remaining_by: crate::entities::Party,
    /// Ownership bucket
    pub responsibility: crate::entities::Responsibility,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    /// Workflow status
    pub status: crate::entities::VendorStatus,
    /// Free-text notes
    pub notes: String,
    /// Invoice or vendor website link
    pub link: String,
}

fn validate_draft(draft: &VendorDraft) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Vendor name cannot be empty".to_string(),
        });
    }
    if draft.total < 0.0 {
        return Err(Error::InvalidAmount { amount: draft.total });
    }
    if draft.paid < 0.0 {
        return Err(Error::InvalidAmount { amount: draft.paid });
    }
    Ok(())
}

/// Creates a vendor from a draft and appends it to the active collection.
///
/// The id is allocated from the creation time, `remaining` is computed from
/// the draft amounts, and the created vendor is returned.
pub fn add_vendor(vendors: &mut Vec<Vendor>, draft: VendorDraft) -> Result<Vendor> {
    validate_draft(&draft)?;

    let vendor = Vendor {
        id: next_record_id(),
        name: draft.name.trim().to_string(),
        total: draft.total,
        paid: draft.paid,
        remaining: draft.total - draft.paid,
        paid_by: draft.paid_by,
        remaining_by: draft.remaining_by,
        responsibility: draft.responsibility,
        due_date: draft.due_date,
        status: draft.status,
        notes: draft.notes,
        link: draft.link,
        created_at: Some(Utc::now()),
    };
    vendors.push(vendor.clone());
    Ok(vendor)
}

/// Replaces the vendor with `updated.id` in place.
///
/// `remaining` is recomputed from the updated amounts; whatever value the
/// caller left in `updated.remaining` is ignored.
pub fn edit_vendor(vendors: &mut [Vendor], mut updated: Vendor) -> Result<Vendor> {
    if updated.total < 0.0 {
        return Err(Error::InvalidAmount {
            amount: updated.total,
        });
    }
    if updated.paid < 0.0 {
        return Err(Error::InvalidAmount {
            amount: updated.paid,
        });
    }

    let slot = vendors
        .iter_mut()
        .find(|v| v.id == updated.id)
        .ok_or(Error::VendorNotFound { id: updated.id })?;

    updated.recompute_remaining();
    *slot = updated.clone();
    Ok(updated)
}

/// Removes a vendor from the active collection outright, returning it.
pub fn delete_vendor(vendors: &mut Vec<Vendor>, id: i64) -> Result<Vendor> {
    let index = vendors
        .iter()
        .position(|v| v.id == id)
        .ok_or(Error::VendorNotFound { id })?;
    Ok(vendors.remove(index))
}

/// Moves a vendor from the active collection to the completed collection,
/// stamping `today` as the completion date.
///
/// The `remaining == 0` precondition is advisory and enforced by callers
/// surfacing the action, not re-validated here. The move is atomic from the
/// caller's point of view: the record is never in both collections.
pub fn complete_vendor(
    vendors: &mut Vec<Vendor>,
    completed: &mut Vec<CompletedVendor>,
    id: i64,
    today: NaiveDate,
) -> Result<CompletedVendor> {
    let vendor = delete_vendor(vendors, id)?;
    let entry = CompletedVendor {
        vendor,
        completed_date: today,
    };
    completed.push(entry.clone());
    Ok(entry)
}

/// Moves a completed vendor back to the active collection, stripping the
/// completion date. Every other field is preserved, including the id.
pub fn restore_vendor(
    completed: &mut Vec<CompletedVendor>,
    vendors: &mut Vec<Vendor>,
    id: i64,
) -> Result<Vendor> {
    let index = completed
        .iter()
        .position(|c| c.vendor.id == id)
        .ok_or(Error::VendorNotFound { id })?;
    let entry = completed.remove(index);
    vendors.push(entry.vendor.clone());
    Ok(entry.vendor)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{date, test_vendor};

    fn draft(name: &str, total: f64, paid: f64) -> VendorDraft {
        VendorDraft {
            name: name.to_string(),
            total,
            paid,
            ..VendorDraft::default()
        }
    }

    #[test]
    fn test_add_vendor_computes_remaining() {
        let mut vendors = Vec::new();
        let vendor = add_vendor(&mut vendors, draft("Cake", 1380.0, 690.0)).unwrap();
        assert_eq!(vendor.remaining, 690.0);
        assert_eq!(vendors.len(), 1);
        assert!(vendor.id > 0);
        assert!(vendor.created_at.is_some());
    }

    #[test]
    fn test_add_vendor_rejects_blank_name() {
        let mut vendors = Vec::new();
        let result = add_vendor(&mut vendors, draft("   ", 100.0, 0.0));
        assert!(matches!(result, Err(Error::InvalidInput { .. })));
        assert!(vendors.is_empty());
    }

    #[test]
    fn test_add_vendor_rejects_negative_amounts() {
        let mut vendors = Vec::new();
        let result = add_vendor(&mut vendors, draft("Cake", -1.0, 0.0));
        assert!(matches!(
            result,
            Err(Error::InvalidAmount { amount: -1.0 })
        ));
    }

    #[test]
    fn test_edit_vendor_recomputes_remaining() {
        let mut vendors = vec![test_vendor("Cake", 1380.0, 690.0)];
        let mut updated = vendors[0].clone();
        updated.paid = 1380.0;
        updated.remaining = 12345.0; // stale caller value, must be ignored

        let saved = edit_vendor(&mut vendors, updated).unwrap();
        assert_eq!(saved.remaining, 0.0);
        assert_eq!(vendors[0].remaining, 0.0);
    }

    #[test]
    fn test_edit_vendor_unknown_id() {
        let mut vendors = vec![test_vendor("Cake", 1380.0, 690.0)];
        let mut ghost = test_vendor("Ghost", 1.0, 0.0);
        ghost.id = 999_999;
        assert!(matches!(
            edit_vendor(&mut vendors, ghost),
            Err(Error::VendorNotFound { id: 999_999 })
        ));
    }

    #[test]
    fn test_delete_vendor() {
        let mut vendors = vec![test_vendor("Cake", 1380.0, 690.0)];
        let id = vendors[0].id;
        let removed = delete_vendor(&mut vendors, id).unwrap();
        assert_eq!(removed.name, "Cake");
        assert!(vendors.is_empty());
    }

    #[test]
    fn test_complete_moves_vendor_with_completion_date() {
        // The cake scenario: 1380 contracted, fully paid, then completed.
        let mut vendors = vec![test_vendor("Cake", 1380.0, 690.0)];
        let id = vendors[0].id;

        let mut paid_up = vendors[0].clone();
        paid_up.paid = 1380.0;
        edit_vendor(&mut vendors, paid_up).unwrap();
        assert_eq!(vendors[0].remaining, 0.0);

        let mut completed = Vec::new();
        let entry = complete_vendor(&mut vendors, &mut completed, id, date(2025, 8, 25)).unwrap();

        assert!(vendors.is_empty());
        assert_eq!(completed.len(), 1);
        assert_eq!(entry.vendor.total, 1380.0);
        assert_eq!(entry.completed_date, date(2025, 8, 25));
        assert_eq!(entry.vendor.id, id);
    }

    #[test]
    fn test_complete_does_not_revalidate_remaining() {
        // The zero-remaining precondition is advisory; completing a vendor
        // that still owes money succeeds.
        let mut vendors = vec![test_vendor("DJ", 1300.0, 250.0)];
        let id = vendors[0].id;
        let mut completed = Vec::new();
        let entry = complete_vendor(&mut vendors, &mut completed, id, date(2025, 8, 25)).unwrap();
        assert_eq!(entry.vendor.remaining, 1050.0);
    }

    #[test]
    fn test_complete_restore_round_trip_preserves_fields() {
        let mut original = test_vendor("Violin", 1260.0, 1260.0);
        original.notes = "Paid in full".to_string();
        original.due_date = Some(date(2025, 9, 4));
        let id = original.id;

        let mut vendors = vec![original.clone()];
        let mut completed = Vec::new();

        complete_vendor(&mut vendors, &mut completed, id, date(2025, 8, 25)).unwrap();
        let restored = restore_vendor(&mut completed, &mut vendors, id).unwrap();

        assert_eq!(restored, original);
        assert!(completed.is_empty());
        assert_eq!(vendors, vec![original]);
    }

    #[test]
    fn test_vendor_never_in_both_collections() {
        let mut vendors = vec![test_vendor("Cake", 1380.0, 1380.0)];
        let id = vendors[0].id;
        let mut completed = Vec::new();

        complete_vendor(&mut vendors, &mut completed, id, date(2025, 8, 25)).unwrap();
        assert!(!vendors.iter().any(|v| v.id == id));
        assert!(completed.iter().any(|c| c.vendor.id == id));

        restore_vendor(&mut completed, &mut vendors, id).unwrap();
        assert!(vendors.iter().any(|v| v.id == id));
        assert!(!completed.iter().any(|c| c.vendor.id == id));
    }

    #[test]
    fn test_restore_unknown_id() {
        let mut completed = Vec::new();
        let mut vendors = Vec::new();
        assert!(matches!(
            restore_vendor(&mut completed, &mut vendors, 42),
            Err(Error::VendorNotFound { id: 42 })
        ));
    }
}
