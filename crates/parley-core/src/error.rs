//! Error types for Parley core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.
//!
//! Rejected prompt attempts (a line that fails conversion or validation)
//! are not errors. They are consumed by the retry loop in [`crate::prompt`]
//! and never surface here. Exhausting a bounded attempt budget surfaces as
//! [`crate::prompt::PromptOutcome::Exhausted`], also not an error.

use thiserror::Error;

/// Result type alias for Parley operations.
pub type Result<T> = std::result::Result<T, ParleyError>;

/// Core error type for Parley operations.
#[derive(Debug, Error)]
pub enum ParleyError {
    /// Console I/O error while writing a prompt or reading a line
    #[error("Console error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// API request descriptor failed parameter verification
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}
