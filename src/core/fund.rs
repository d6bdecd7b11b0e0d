//! Incoming fund operations.

use crate::entities::{Fund, FundStatus, next_record_id};
use crate::errors::{Error, Result};
use chrono::{NaiveDate, Utc};

/// Fields collected from the add/edit fund form.
#[derive(Debug, Clone, Default)]
pub struct FundDraft {
    /// Where the money comes from, required non-empty
    pub source: String,
    /// Amount in dollars
    pub amount: f64,
    /// When the contribution is expected
    pub date_expected: Option<NaiveDate>,
    /// Free-text notes
    pub notes: String,
}

/// Creates a fund from a draft and appends it to the collection.
///
/// New funds always start in the `expected` state.
pub fn add_fund(funds: &mut Vec<Fund>, draft: FundDraft) -> Result<Fund> {
    if draft.source.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Fund source cannot be empty".to_string(),
        });
    }
    if draft.amount < 0.0 {
        return Err(Error::InvalidAmount {
            amount: draft.amount,
        });
    }

    let fund = Fund {
        id: next_record_id(),
        source: draft.source.trim().to_string(),
        amount: draft.amount,
        date_expected: draft.date_expected,
        date_received: None,
        status: FundStatus::Expected,
        notes: draft.notes,
        created_at: Some(Utc::now()),
    };
    funds.push(fund.clone());
    Ok(fund)
}

/// Replaces the fund with `updated.id` in place.
pub fn edit_fund(funds: &mut [Fund], updated: Fund) -> Result<Fund> {
    if updated.amount < 0.0 {
        return Err(Error::InvalidAmount {
            amount: updated.amount,
        });
    }
    let slot = funds
        .iter_mut()
        .find(|f| f.id == updated.id)
        .ok_or(Error::FundNotFound { id: updated.id })?;
    *slot = updated.clone();
    Ok(updated)
}

/// Removes a fund outright, returning it.
pub fn delete_fund(funds: &mut Vec<Fund>, id: i64) -> Result<Fund> {
    let index = funds
        .iter()
        .position(|f| f.id == id)
        .ok_or(Error::FundNotFound { id })?;
    Ok(funds.remove(index))
}

/// Marks a fund as received, stamping `today` as the received date.
///
/// There is no automatic reverse transition; only an explicit edit can move
/// a fund back to `expected`.
pub fn mark_fund_received(funds: &mut [Fund], id: i64, today: NaiveDate) -> Result<Fund> {
    let fund = funds
        .iter_mut()
        .find(|f| f.id == id)
        .ok_or(Error::FundNotFound { id })?;
    fund.status = FundStatus::Received;
    fund.date_received = Some(today);
    Ok(fund.clone())
}
