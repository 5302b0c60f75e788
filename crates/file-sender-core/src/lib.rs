//! # File Sender Core
//!
//! Pure primitives for preparing documents for transmission: the [`Outcome`]
//! container, documents, validation steps, signing and the preparation
//! pipeline.
//!
//! This crate contains no I/O and no transport. Recognizers, cryptographers
//! and clocks are injected through the capability traits in [`traits`].
//!
//! ## Key Types
//!
//! - [`Outcome`] - Success value or failure message, chained with [`Outcome::then`]
//! - [`FileContent`] - Raw, unprocessed input
//! - [`Document`] - Recognized document, replaced wholesale at each step
//! - [`Credential`] - Ed25519 signing material
//!
//! ## Pipeline
//!
//! ```text
//! FileContent -> recognize -> check format -> check timestamp -> sign -> Document
//! ```
//!
//! See [`pipeline::prepare_to_send`].

pub mod clock;
pub mod crypto;
pub mod error;
pub mod outcome;
pub mod pipeline;
pub mod signer;
pub mod traits;
pub mod types;
pub mod validation;

pub use clock::{FixedClock, SystemClock};
pub use crypto::{
    Credential, Ed25519Cryptographer, Ed25519PublicKey, Ed25519Signature, SignedEnvelope,
};
pub use error::{EnvelopeError, RecognizeError, SignError};
pub use outcome::{Failure, FailureKind, Outcome};
pub use pipeline::{prepare_to_send, PipelineContext, PREPARE_ERROR_PREFIX};
pub use signer::sign_document;
pub use traits::{Clock, Cryptographer, Recognizer};
pub use types::{ContentDigest, Document, FileContent};
pub use validation::{
    check_format, check_timestamp, freshness_cutoff, ValidationPolicy, DEFAULT_ACCEPTED_FORMATS,
};
