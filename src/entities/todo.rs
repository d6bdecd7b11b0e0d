//! Wedding checklist items.
//!
//! Todos are plain two-state records: completed flips freely in both
//! directions, unlike the vendor completion workflow.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single checklist item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Todo {
    /// Unique id, allocated from the creation time in epoch milliseconds
    pub id: i64,
    /// What needs doing; required non-empty on creation
    pub task: String,
    /// Optional due date
    #[serde(with = "super::opt_date")]
    pub due_date: Option<NaiveDate>,
    /// Whether the item is done
    pub completed: bool,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_todo_defaults() {
        let todo: Todo = serde_json::from_str(r#"{"id":1,"task":"Book tasting"}"#).unwrap();
        assert!(!todo.completed);
        assert_eq!(todo.due_date, None);
    }
}
