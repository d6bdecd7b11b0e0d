//! Unified error type for the tracker.
//!
//! Everything here is non-fatal by design: persistence failures degrade to
//! cached or empty data, and sync failures only surface as a status value.
//! Callers that hit a domain error (bad input, unknown record id) get a
//! structured variant they can report and move on from.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// User-supplied input failed validation
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable description of the rejected input
        message: String,
    },

    /// A monetary amount was negative
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending amount
        amount: f64,
    },

    /// No active vendor with the given id
    #[error("Vendor not found: {id}")]
    VendorNotFound {
        /// Id that was looked up
        id: i64,
    },

    /// No fund with the given id
    #[error("Fund not found: {id}")]
    FundNotFound {
        /// Id that was looked up
        id: i64,
    },

    /// No todo with the given id
    #[error("Todo not found: {id}")]
    TodoNotFound {
        /// Id that was looked up
        id: i64,
    },

    /// The remote record store rejected a request
    #[error("Remote store error: {message}")]
    Remote {
        /// Human-readable description of the remote failure
        message: String,
    },

    /// I/O error (cache directory, export file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error talking to the remote store
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
