//! Error types for loading suggest configuration and candidate lists.
//!
//! Distance and ranking never fail; only reading options or candidates from
//! outside the process can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuggestError {
    /// Options file missing or unreadable
    #[error("Failed to read options from {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed options JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Candidate list could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for suggest operations
pub type Result<T> = std::result::Result<T, SuggestError>;
