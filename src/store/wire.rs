//! Snake_case wire records for the remote store.
//!
//! The remote tables speak snake_case while the in-memory models (and the
//! local cache and export document) are camelCase. This module is the single
//! place where that translation happens; nothing outside the store layer
//! touches wire field names.
//!
//! Reads are tolerant: missing amounts default to 0, missing enums to their
//! defaults, and a missing `created_at` is filled with the current time on
//! the next write.

use crate::entities::{
    Finances, Fund, FundStatus, Party, Responsibility, Todo, Vendor, VendorStatus,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The fixed row id of the finances singleton.
pub const FINANCES_ROW_ID: i64 = 1;

/// A vendor row as stored remotely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorRecord {
    /// Primary key, same id as in memory
    pub id: i64,
    /// Vendor name
    pub name: String,
    #[serde(default)]
    total: Option<f64>,
    #[serde(default)]
    paid: Option<f64>,
    #[serde(default)]
    remaining: Option<f64>,
    #[serde(default)]
    paid_by: Option<String>,
    #[serde(default)]
    remaining_by: Option<Party>,
    #[serde(default)]
    responsibility: Option<Responsibility>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    status: Option<VendorStatus>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<&Vendor> for VendorRecord {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id,
            name: vendor.name.clone(),
            total: Some(vendor.total),
            paid: Some(vendor.paid),
            remaining: Some(vendor.remaining),
            paid_by: Some(vendor.paid_by.clone()),
            remaining_by: Some(vendor.remaining_by),
            responsibility: Some(vendor.responsibility),
            due_date: vendor.due_date,
            status: Some(vendor.status),
            notes: Some(vendor.notes.clone()),
            link: Some(vendor.link.clone()),
            created_at: Some(vendor.created_at.unwrap_or_else(Utc::now)),
        }
    }
}

impl From<VendorRecord> for Vendor {
    fn from(record: VendorRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            total: record.total.unwrap_or(0.0),
            paid: record.paid.unwrap_or(0.0),
            remaining: record.remaining.unwrap_or(0.0),
            paid_by: record.paid_by.unwrap_or_default(),
            remaining_by: record.remaining_by.unwrap_or_default(),
            responsibility: record.responsibility.unwrap_or_default(),
            due_date: record.due_date,
            status: record.status.unwrap_or_default(),
            notes: record.notes.unwrap_or_default(),
            link: record.link.unwrap_or_default(),
            created_at: record.created_at,
        }
    }
}

/// A fund row as stored remotely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundRecord {
    /// Primary key, same id as in memory
    pub id: i64,
    /// Contribution source
    pub source: String,
    #[serde(default)]
    amount: Option<f64>,
    #[serde(default)]
    date_expected: Option<NaiveDate>,
    #[serde(default)]
    date_received: Option<NaiveDate>,
    #[serde(default)]
    status: Option<FundStatus>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<&Fund> for FundRecord {
    fn from(fund: &Fund) -> Self {
        Self {
            id: fund.id,
            source: fund.source.clone(),
            amount: Some(fund.amount),
            date_expected: fund.date_expected,
            date_received: fund.date_received,
            status: Some(fund.status),
            notes: Some(fund.notes.clone()),
            created_at: Some(fund.created_at.unwrap_or_else(Utc::now)),
        }
    }
}

impl From<FundRecord> for Fund {
    fn from(record: FundRecord) -> Self {
        Self {
            id: record.id,
            source: record.source,
            amount: record.amount.unwrap_or(0.0),
            date_expected: record.date_expected,
            date_received: record.date_received,
            status: record.status.unwrap_or_default(),
            notes: record.notes.unwrap_or_default(),
            created_at: record.created_at,
        }
    }
}

/// A checklist row as stored remotely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Primary key, same id as in memory
    pub id: i64,
    /// Task text
    pub task: String,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    completed: Option<bool>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<&Todo> for TodoRecord {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            task: todo.task.clone(),
            due_date: todo.due_date,
            completed: Some(todo.completed),
            created_at: Some(todo.created_at.unwrap_or_else(Utc::now)),
        }
    }
}

impl From<TodoRecord> for Todo {
    fn from(record: TodoRecord) -> Self {
        Self {
            id: record.id,
            task: record.task,
            due_date: record.due_date,
            completed: record.completed.unwrap_or(false),
            created_at: record.created_at,
        }
    }
}

/// The finances singleton row as stored remotely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancesRecord {
    /// Fixed row id; the singleton is upserted in place
    pub id: i64,
    #[serde(default)]
    michaela_savings: Option<f64>,
    #[serde(default)]
    arrington_savings: Option<f64>,
    #[serde(default)]
    joint_savings: Option<f64>,
    #[serde(default)]
    michaela_paid: Option<f64>,
    #[serde(default)]
    arrington_paid: Option<f64>,
    #[serde(default)]
    joint_paid: Option<f64>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<&Finances> for FinancesRecord {
    fn from(finances: &Finances) -> Self {
        Self {
            id: FINANCES_ROW_ID,
            michaela_savings: Some(finances.michaela_savings),
            arrington_savings: Some(finances.arrington_savings),
            joint_savings: Some(finances.joint_savings),
            michaela_paid: Some(finances.michaela_paid),
            arrington_paid: Some(finances.arrington_paid),
            joint_paid: Some(finances.joint_paid),
            updated_at: Some(Utc::now()),
        }
    }
}

impl From<FinancesRecord> for Finances {
    fn from(record: FinancesRecord) -> Self {
        Self {
            michaela_savings: record.michaela_savings.unwrap_or(0.0),
            arrington_savings: record.arrington_savings.unwrap_or(0.0),
            joint_savings: record.joint_savings.unwrap_or(0.0),
            michaela_paid: record.michaela_paid.unwrap_or(0.0),
            arrington_paid: record.arrington_paid.unwrap_or(0.0),
            joint_paid: record.joint_paid.unwrap_or(0.0),
        }
    }
}
