//! Local JSON cache - one file per collection under a data directory.
//!
//! The cache holds each collection as a camelCase JSON document under a
//! fixed key. It is read once at startup (as the fallback behind the remote
//! store) and written after every mutation. Read or parse failures are
//! logged and treated as "no cached data" - never fatal, never surfaced.

use crate::errors::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fixed cache keys, one per collection.
///
/// The key names are carried over from the tracker's original browser
/// storage so an exported cache stays recognizable.
pub mod keys {
    /// Active vendors
    pub const VENDORS: &str = "weddingVendors";
    /// Completed vendors (cache-only, never synced)
    pub const COMPLETED_VENDORS: &str = "completedVendors";
    /// Incoming funds
    pub const FUNDS: &str = "weddingFunds";
    /// Wedding checklist
    pub const TODOS: &str = "weddingTodos";
    /// Personal savings singleton
    pub const FINANCES: &str = "ourFinances";
}

/// File-backed cache for the record collections.
#[derive(Debug, Clone)]
pub struct LocalCache {
    dir: PathBuf,
}

impl LocalCache {
    /// Creates a cache rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// The cache's root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads the collection stored under `key`.
    ///
    /// Returns `None` when the entry is missing, unreadable or unparseable;
    /// the failure is logged at warn level and the caller falls back to an
    /// empty or default collection.
    pub fn load<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let path = self.path(key);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No cache entry for {key}");
                return None;
            }
            Err(e) => {
                warn!("Failed to read cache entry {key}: {e}");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding unparseable cache entry {key}: {e}");
                None
            }
        }
    }

    /// Writes the collection under `key`, replacing any previous entry.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path(key), json)?;
        Ok(())
    }
}
