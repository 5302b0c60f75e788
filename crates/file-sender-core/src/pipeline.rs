//! File preparation: recognize, validate and sign one file.
//!
//! The steps run in a fixed order. Format is checked before freshness and
//! both before signing, so a structurally invalid document is never signed.

use crate::crypto::Credential;
use crate::outcome::{FailureKind, Outcome};
use crate::signer::sign_document;
use crate::traits::{Clock, Cryptographer, Recognizer};
use crate::types::{Document, FileContent};
use crate::validation::{check_format, check_timestamp, ValidationPolicy};

/// Prefix applied once to any preparation failure.
pub const PREPARE_ERROR_PREFIX: &str = "Can't prepare file to send. ";

/// The collaborators and policy a preparation run needs.
pub struct PipelineContext<'a, R: ?Sized, C: ?Sized, K: ?Sized> {
    pub recognizer: &'a R,
    pub cryptographer: &'a C,
    pub clock: &'a K,
    pub policy: &'a ValidationPolicy,
}

impl<'a, R, C, K> PipelineContext<'a, R, C, K>
where
    R: Recognizer + ?Sized,
    C: Cryptographer + ?Sized,
    K: Clock + ?Sized,
{
    /// Prepare `file` for sending.
    pub fn prepare(&self, file: &FileContent, credential: &Credential) -> Outcome<Document> {
        prepare_to_send(
            file,
            credential,
            self.recognizer,
            self.cryptographer,
            self.clock,
            self.policy,
        )
    }
}

/// Recognize, validate and sign `file`.
///
/// Any failure is prefixed with [`PREPARE_ERROR_PREFIX`] exactly once. The
/// clock is read only if recognition and the format check succeed.
pub fn prepare_to_send<R, C, K>(
    file: &FileContent,
    credential: &Credential,
    recognizer: &R,
    cryptographer: &C,
    clock: &K,
    policy: &ValidationPolicy,
) -> Outcome<Document>
where
    R: Recognizer + ?Sized,
    C: Cryptographer + ?Sized,
    K: Clock + ?Sized,
{
    Outcome::of_kind(FailureKind::Recognition, recognizer.recognize(file))
        .then(|doc| check_format(doc, policy))
        .then(|doc| check_timestamp(doc, clock.now(), policy))
        .then(|doc| sign_document(doc, cryptographer, credential))
        .refine_error(PREPARE_ERROR_PREFIX)
}
