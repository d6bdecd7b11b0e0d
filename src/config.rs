//! Application configuration.
//!
//! Local settings (data directory, sync debounce) come from an optional TOML
//! file; remote credentials come from the environment so they never land in
//! a checked-in file. A missing config file is not an error, the defaults
//! cover it.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

/// Environment variable holding the remote store's base URL.
pub const REMOTE_URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the remote store's API key.
pub const REMOTE_KEY_VAR: &str = "SUPABASE_ANON_KEY";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Settings loaded from the optional `config.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the local cache files
    pub data_dir: PathBuf,
    /// Remote sync tuning
    pub sync: SyncConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            sync: SyncConfig::default(),
        }
    }
}

/// Remote sync tuning knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Quiet period after the last mutation before a remote save, in
    /// milliseconds
    pub debounce_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl Config {
    /// Loads the configuration from `path`, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when the file exists but cannot be read or
    /// parsed; a malformed config should be fixed, not silently ignored.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("Failed to read config file {}: {e}", path.display()),
        })?;
        toml::from_str(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config file {}: {e}", path.display()),
        })
    }

    /// The sync debounce window as a [`Duration`].
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.sync.debounce_ms)
    }
}

/// Credentials for the hosted record store.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL, e.g. `https://project.supabase.co`
    pub url: String,
    /// Anonymous API key
    pub api_key: String,
}

impl RemoteConfig {
    /// Reads the remote credentials from the environment.
    ///
    /// Returns `None` when either variable is unset, in which case the
    /// tracker runs cache-only. A partially set pair is logged since it is
    /// almost certainly a deployment mistake.
    pub fn from_env() -> Option<Self> {
        let url = env::var(REMOTE_URL_VAR).ok();
        let api_key = env::var(REMOTE_KEY_VAR).ok();
        match (url, api_key) {
            (Some(url), Some(api_key)) => Some(Self { url, api_key }),
            (None, None) => None,
            _ => {
                tracing::warn!(
                    "Only one of {REMOTE_URL_VAR} and {REMOTE_KEY_VAR} is set; \
                     running without remote sync"
                );
                None
            }
        }
    }
}
