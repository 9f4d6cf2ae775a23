//! Error types for the autoreview library.
//!
//! The decision engine itself never fails for valid-shaped input: missing
//! data and misconfiguration degrade to neutral check results. Errors only
//! arise at the API boundary, when loading contexts or validating
//! configuration.

use thiserror::Error;

/// Main error type for autoreview operations.
#[derive(Debug, Error)]
pub enum AutoreviewError {
    /// Configuration error (invalid threshold, unknown check id, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for autoreview operations.
pub type Result<T> = std::result::Result<T, AutoreviewError>;
