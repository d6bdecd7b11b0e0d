//! Bulk export of the tracked collections into one JSON document.
//!
//! The document uses the same camelCase shapes as the local cache, so an
//! export doubles as a portable backup of everything the remote store holds.

use crate::entities::{Finances, Fund, Todo, Vendor};
use crate::errors::Result;
use crate::state::AppState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// The full backup document: the four synced collections plus a timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Active vendor obligations
    pub vendors: Vec<Vendor>,
    /// Incoming funds
    pub funds: Vec<Fund>,
    /// Wedding checklist
    pub todos: Vec<Todo>,
    /// Personal savings singleton
    pub finances: Finances,
    /// When the export was taken
    pub exported_at: DateTime<Utc>,
}

impl ExportDocument {
    /// Builds an export document from a state snapshot, stamped with now.
    pub fn from_state(state: &AppState) -> Self {
        Self {
            vendors: state.vendors.clone(),
            funds: state.funds.clone(),
            todos: state.todos.clone(),
            finances: state.finances.clone(),
            exported_at: Utc::now(),
        }
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the document to `path` as JSON.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!(
            "Exported {} vendors, {} funds, {} todos to {}",
            self.vendors.len(),
            self.funds.len(),
            self.todos.len(),
            path.display()
        );
        Ok(())
    }
}
