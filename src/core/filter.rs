//! Date-window filtering and exact-date bucketing of vendors.
//!
//! The filter classifies every dated vendor as overdue or upcoming relative
//! to a caller-supplied "today" - classification happens at application
//! time, so re-running the filter later may move a vendor across the overdue
//! boundary. Undated vendors are controlled solely by the no-date flag.

use crate::entities::Vendor;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Configuration for the vendor date filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFilter {
    /// Exclude vendors due before this date
    pub start_date: Option<NaiveDate>,
    /// Exclude vendors due after this date
    pub end_date: Option<NaiveDate>,
    /// Include vendors whose due date is in the past
    pub show_overdue: bool,
    /// Include vendors whose due date is today or later
    pub show_upcoming: bool,
    /// Include vendors with no due date at all
    pub show_no_date: bool,
}

impl Default for DateFilter {
    /// The permissive filter: everything shown, no date window.
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            show_overdue: true,
            show_upcoming: true,
            show_no_date: true,
        }
    }
}

impl DateFilter {
    /// Whether a single vendor passes this filter as of `today`.
    ///
    /// Undated vendors are included iff `show_no_date`; the window and
    /// overdue/upcoming flags never apply to them.
    pub fn matches(&self, vendor: &Vendor, today: NaiveDate) -> bool {
        let Some(due) = vendor.due_date else {
            return self.show_no_date;
        };

        let overdue = due < today;
        if overdue && !self.show_overdue {
            return false;
        }
        if !overdue && !self.show_upcoming {
            return false;
        }

        if self.start_date.is_some_and(|start| due < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| due > end) {
            return false;
        }

        true
    }
}

/// Returns the vendors passing `filter`, in their original order.
pub fn filter_vendors(vendors: &[Vendor], filter: &DateFilter, today: NaiveDate) -> Vec<Vendor> {
    vendors
        .iter()
        .filter(|v| filter.matches(v, today))
        .cloned()
        .collect()
}

/// Vendors sharing one exact due date.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    /// The shared due date
    pub date: NaiveDate,
    /// Member vendors, in original collection order
    pub vendors: Vec<Vendor>,
    /// True when the group's date is in the past as of grouping time
    pub is_overdue: bool,
    /// Human-readable month/year label (e.g., "September 2025")
    pub month_year: String,
}

/// Result of bucketing vendors by due date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorsByDate {
    /// Dated groups, ascending by date
    pub groups: Vec<DateGroup>,
    /// Vendors without a due date, reported alongside the groups
    pub no_date: Vec<Vendor>,
}

/// Groups vendors by their exact due-date string for the timeline view.
///
/// Grouping is by literal date, not by range. Each group carries an overdue
/// flag relative to `today` and a month/year label; groups come back in
/// ascending date order. Undated vendors form a separate bucket that is
/// never merged into the dated groups.
pub fn group_vendors_by_date(vendors: &[Vendor], today: NaiveDate) -> VendorsByDate {
    let mut dated: BTreeMap<NaiveDate, Vec<Vendor>> = BTreeMap::new();
    let mut no_date = Vec::new();

    for vendor in vendors {
        match vendor.due_date {
            Some(due) => dated.entry(due).or_default().push(vendor.clone()),
            None => no_date.push(vendor.clone()),
        }
    }

    let groups = dated
        .into_iter()
        .map(|(date, members)| DateGroup {
            date,
            vendors: members,
            is_overdue: date < today,
            month_year: date.format("%B %Y").to_string(),
        })
        .collect();

    VendorsByDate { groups, no_date }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{date, test_vendor};

    fn dated(name: &str, due: NaiveDate) -> Vendor {
        let mut vendor = test_vendor(name, 100.0, 0.0);
        vendor.due_date = Some(due);
        vendor
    }

    #[test]
    fn test_no_date_vendor_follows_only_the_no_date_flag() {
        let vendors = vec![test_vendor("Giveaways", 800.0, 0.0)];
        let today = date(2025, 8, 25);

        // Included iff show_no_date, regardless of every other flag.
        for (show_overdue, show_upcoming) in
            [(false, false), (false, true), (true, false), (true, true)]
        {
            let shown = DateFilter {
                show_overdue,
                show_upcoming,
                ..DateFilter::default()
            };
            assert_eq!(filter_vendors(&vendors, &shown, today).len(), 1);

            let hidden = DateFilter {
                show_no_date: false,
                show_overdue,
                show_upcoming,
                ..DateFilter::default()
            };
            assert!(filter_vendors(&vendors, &hidden, today).is_empty());
        }
    }

    #[test]
    fn test_overdue_and_upcoming_flags() {
        let vendors = vec![
            dated("Past", date(2025, 8, 1)),
            dated("Future", date(2025, 9, 4)),
        ];
        let today = date(2025, 8, 25);

        let no_overdue = DateFilter {
            show_overdue: false,
            ..DateFilter::default()
        };
        let filtered = filter_vendors(&vendors, &no_overdue, today);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Future");

        let no_upcoming = DateFilter {
            show_upcoming: false,
            ..DateFilter::default()
        };
        let filtered = filter_vendors(&vendors, &no_upcoming, today);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Past");
    }

    #[test]
    fn test_due_today_counts_as_upcoming() {
        let vendors = vec![dated("Today", date(2025, 8, 25))];
        let no_upcoming = DateFilter {
            show_upcoming: false,
            ..DateFilter::default()
        };
        assert!(filter_vendors(&vendors, &no_upcoming, date(2025, 8, 25)).is_empty());
    }

    #[test]
    fn test_reclassification_across_the_overdue_boundary() {
        // The same vendor flips from upcoming to overdue as "today" advances.
        let vendors = vec![dated("Cake", date(2025, 9, 4))];
        let no_overdue = DateFilter {
            show_overdue: false,
            ..DateFilter::default()
        };
        assert_eq!(
            filter_vendors(&vendors, &no_overdue, date(2025, 9, 1)).len(),
            1
        );
        assert!(filter_vendors(&vendors, &no_overdue, date(2025, 9, 5)).is_empty());
    }

    #[test]
    fn test_date_window_bounds_are_inclusive() {
        let vendors = vec![
            dated("Early", date(2025, 9, 1)),
            dated("Mid", date(2025, 9, 4)),
            dated("Late", date(2025, 9, 30)),
        ];
        let window = DateFilter {
            start_date: Some(date(2025, 9, 4)),
            end_date: Some(date(2025, 9, 4)),
            ..DateFilter::default()
        };
        let filtered = filter_vendors(&vendors, &window, date(2025, 8, 25));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Mid");
    }

    #[test]
    fn test_grouping_orders_ascending_with_labels() {
        let vendors = vec![
            dated("Bar", date(2025, 10, 1)),
            dated("Cake", date(2025, 9, 4)),
            dated("Photography", date(2025, 9, 4)),
            test_vendor("Giveaways", 800.0, 0.0),
        ];
        let grouped = group_vendors_by_date(&vendors, date(2025, 8, 25));

        assert_eq!(grouped.groups.len(), 2);
        assert_eq!(grouped.groups[0].date, date(2025, 9, 4));
        assert_eq!(grouped.groups[0].vendors.len(), 2);
        assert_eq!(grouped.groups[0].month_year, "September 2025");
        assert_eq!(grouped.groups[1].date, date(2025, 10, 1));
        assert_eq!(grouped.groups[1].month_year, "October 2025");

        assert_eq!(grouped.no_date.len(), 1);
        assert_eq!(grouped.no_date[0].name, "Giveaways");
    }

    #[test]
    fn test_grouping_overdue_flag() {
        let vendors = vec![
            dated("Past", date(2025, 8, 1)),
            dated("Future", date(2025, 9, 4)),
        ];
        let grouped = group_vendors_by_date(&vendors, date(2025, 8, 25));
        assert!(grouped.groups[0].is_overdue);
        assert!(!grouped.groups[1].is_overdue);
    }

    #[test]
    fn test_grouping_preserves_member_order() {
        let vendors = vec![
            dated("First", date(2025, 9, 4)),
            dated("Second", date(2025, 9, 4)),
        ];
        let grouped = group_vendors_by_date(&vendors, date(2025, 8, 25));
        assert_eq!(grouped.groups[0].vendors[0].name, "First");
        assert_eq!(grouped.groups[0].vendors[1].name, "Second");
    }
}
