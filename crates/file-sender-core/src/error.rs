//! Error types raised by the injected collaborators.
//!
//! The `Display` text of each variant is exactly the message that ends up in
//! an outcome, so variants carrying a message print it verbatim.

use thiserror::Error;

/// The recognizer could not turn raw content into a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognizeError {
    #[error("{0}")]
    NotRecognized(String),
}

/// The cryptographer could not sign content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignError {
    #[error("{0}")]
    CannotSign(String),

    #[error("encoding error: {0}")]
    Encoding(String),
}

/// A signed envelope could not be decoded or verified.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("decoding error: {0}")]
    Decoding(String),

    #[error("unsupported envelope version: {0}")]
    UnsupportedVersion(u8),

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("invalid signature")]
    InvalidSignature,
}
