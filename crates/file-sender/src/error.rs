//! Error types for the file sender.
//!
//! Per-file failures never surface here; they are recorded on each
//! [`FileSendResult`](crate::FileSendResult). These errors cover setup only.

use thiserror::Error;

/// Errors loading or checking a [`FileSenderConfig`](crate::FileSenderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config text is not valid JSON for the config shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// No format versions would ever be accepted.
    #[error("accepted_formats must not be empty")]
    NoAcceptedFormats,

    /// A zero-month window rejects every document not created in the future.
    #[error("max_age_months must be at least 1")]
    ZeroMaxAge,
}

/// Result type for configuration.
pub type Result<T> = std::result::Result<T, ConfigError>;
