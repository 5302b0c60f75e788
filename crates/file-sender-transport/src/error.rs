//! Error types for transports.

use thiserror::Error;

/// A document could not be delivered.
///
/// The `Display` text is the verbatim message recorded in the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// Transport is unavailable.
    #[error("{0}")]
    CannotSend(String),

    /// The receiving side refused the document.
    #[error("rejected: {0}")]
    Rejected(String),
}

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, SendError>;
