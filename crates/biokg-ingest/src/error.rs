//! Error types for BioKG ingestion
//!
//! Two tiers: [`IngestError`] aborts a run, [`LookupError`] is confined to a
//! single record and turns into an unresolved output row.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for run-level operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Fatal errors that stop a batch run
#[derive(Error, Debug)]
pub enum IngestError {
    /// The input table does not exist
    #[error("Input file not found: '{}'. Verify the path and read permissions.", .0.display())]
    MissingInput(PathBuf),

    /// The input table exists but cannot be used
    #[error("Invalid input table: {0}")]
    InvalidInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IngestError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Recoverable failure while looking up one record
#[derive(Error, Debug)]
pub enum LookupError {
    /// The service answered with a non-success status
    #[error("GET {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The request never produced a response (connect error, timeout)
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body is not a readable UniProt XML document
    #[error("Malformed UniProt XML: {0}")]
    Parse(String),
}
