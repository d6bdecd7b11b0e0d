//! Aggregation engine - derived summary views over the collections.
//!
//! This module provides the budget, our-payments, date-keyed, funds and
//! savings summaries. All functions are pure folds over slices; they must be
//! re-derivable from the current collections at any time.

use crate::entities::{Finances, Fund, FundStatus, Party, Vendor};
use chrono::NaiveDate;

/// Element-wise totals over the full vendor collection, plus the remainder
/// split by who owes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetSummary {
    /// Sum of contracted costs
    pub total: f64,
    /// Sum of amounts paid
    pub paid: f64,
    /// Sum of outstanding balances
    pub remaining: f64,
    /// Outstanding balance owed by the couple (`remainingBy == Us`)
    pub our_remaining: f64,
    /// Outstanding balance owed by the parents (`remainingBy == Parents`)
    pub parent_remaining: f64,
}

/// A `{total, paid, remaining}` triple over some vendor subset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentTotals {
    /// Sum of contracted costs
    pub total: f64,
    /// Sum of amounts paid
    pub paid: f64,
    /// Sum of outstanding balances
    pub remaining: f64,
}

/// Totals over the incoming funds collection, split by status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundsSummary {
    /// Sum of all fund amounts regardless of status
    pub total_expected: f64,
    /// Sum of amounts already received
    pub received: f64,
    /// Sum of amounts still expected
    pub pending: f64,
}

fn fold_totals<'a, I>(vendors: I) -> PaymentTotals
where
    I: IntoIterator<Item = &'a Vendor>,
{
    vendors
        .into_iter()
        .fold(PaymentTotals::default(), |acc, vendor| PaymentTotals {
            total: acc.total + vendor.total,
            paid: acc.paid + vendor.paid,
            remaining: acc.remaining + vendor.remaining,
        })
}

/// Sums `total`/`paid`/`remaining` across all vendors and splits the
/// remainder by the owing party.
///
/// An empty collection yields all zeros.
pub fn budget_summary(vendors: &[Vendor]) -> BudgetSummary {
    let totals = fold_totals(vendors);
    let remaining_for = |party: Party| {
        vendors
            .iter()
            .filter(|v| v.remaining_by == party)
            .map(|v| v.remaining)
            .sum()
    };

    BudgetSummary {
        total: totals.total,
        paid: totals.paid,
        remaining: totals.remaining,
        our_remaining: remaining_for(Party::Us),
        parent_remaining: remaining_for(Party::Parents),
    }
}

/// Totals restricted to the couple's own obligations.
///
/// "Ours" means `responsibility` is Us or Michaela - the household's personal
/// financial exposure, independent of who ultimately disburses the money.
/// Vendors owned by the parents are strictly excluded.
pub fn our_payments_summary(vendors: &[Vendor]) -> PaymentTotals {
    fold_totals(vendors.iter().filter(|v| v.responsibility.is_ours()))
}

/// Totals for the couple's vendors due on one exact date.
///
/// Filters to vendors whose `dueDate` equals `date` literally (no range
/// semantics) and whose responsibility is Us or Michaela.
pub fn date_keyed_summary(vendors: &[Vendor], date: NaiveDate) -> PaymentTotals {
    fold_totals(
        vendors
            .iter()
            .filter(|v| v.due_date == Some(date) && v.responsibility.is_ours()),
    )
}

/// Sums the incoming funds collection, split by received/expected status.
pub fn funds_summary(funds: &[Fund]) -> FundsSummary {
    funds
        .iter()
        .fold(FundsSummary::default(), |mut acc, fund| {
            acc.total_expected += fund.amount;
            match fund.status {
                FundStatus::Received => acc.received += fund.amount,
                FundStatus::Expected => acc.pending += fund.amount,
            }
            acc
        })
}

/// Signed difference between the couple's remaining obligations and all
/// expected incoming funds. Negative means surplus.
pub fn shortfall(vendors: &[Vendor], funds: &[Fund]) -> f64 {
    budget_summary(vendors).our_remaining - funds_summary(funds).total_expected
}

/// Signed coverage of the couple's remaining obligations by current savings.
/// Positive means savings cover what is still owed.
pub fn savings_gap(finances: &Finances, vendors: &[Vendor]) -> f64 {
    finances.total_savings() - our_payments_summary(vendors).remaining
}

/// Percentage of `total` covered by `paid`, defined as 0 when `total` is 0.
pub fn percent_paid(paid: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (paid / total) * 100.0
}

/// The couple's next `limit` dated payments with money still owed, ascending
/// by due date. Undated vendors and settled vendors are skipped.
pub fn upcoming_payments(vendors: &[Vendor], limit: usize) -> Vec<Vendor> {
    let mut upcoming: Vec<Vendor> = vendors
        .iter()
        .filter(|v| v.responsibility.is_ours() && v.remaining > 0.0 && v.due_date.is_some())
        .cloned()
        .collect();
    upcoming.sort_by_key(|v| v.due_date);
    upcoming.truncate(limit);
    upcoming
}
