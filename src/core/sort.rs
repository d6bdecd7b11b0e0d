//! Toggling single-column vendor sort.
//!
//! Selecting a column sorts ascending; selecting the same column again flips
//! direction; selecting a different column resets to ascending. The sort is
//! stable, so equal keys keep their original relative order.

use crate::entities::Vendor;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// The sortable vendor columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive lexicographic on the vendor name
    Name,
    /// Numeric on the contracted total
    Total,
    /// Numeric on the amount paid
    Paid,
    /// Numeric on the outstanding balance
    Remaining,
    /// Chronological; undated vendors sort as far-future (last ascending)
    DueDate,
    /// Lexicographic on the raw responsibility string
    Responsibility,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

/// Current table sorting state: which column, which direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSorting {
    /// Selected column; `None` leaves the collection order untouched
    pub column: Option<SortKey>,
    /// Direction applied to the selected column
    pub direction: SortDirection,
}

impl TableSorting {
    /// Applies a column selection.
    ///
    /// Re-selecting the current column toggles the direction; any other
    /// column becomes the new ascending sort.
    pub fn toggle(&mut self, column: SortKey) {
        self.direction = if self.column == Some(column)
            && self.direction == SortDirection::Ascending
        {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.column = Some(column);
    }
}

fn compare_by(key: SortKey, a: &Vendor, b: &Vendor) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Total => a.total.total_cmp(&b.total),
        SortKey::Paid => a.paid.total_cmp(&b.paid),
        SortKey::Remaining => a.remaining.total_cmp(&b.remaining),
        SortKey::DueDate => {
            let a_due = a.due_date.unwrap_or(NaiveDate::MAX);
            let b_due = b.due_date.unwrap_or(NaiveDate::MAX);
            a_due.cmp(&b_due)
        }
        SortKey::Responsibility => a.responsibility.as_str().cmp(b.responsibility.as_str()),
    }
}

/// Sorts vendors in place according to the current table sorting state.
///
/// With no column selected this is a no-op. Ties are not broken further;
/// `sort_by` is stable, so original relative order survives.
pub fn sort_vendors(vendors: &mut [Vendor], sorting: TableSorting) {
    let Some(column) = sorting.column else {
        return;
    };

    vendors.sort_by(|a, b| {
        let ordering = compare_by(column, a, b);
        match sorting.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
