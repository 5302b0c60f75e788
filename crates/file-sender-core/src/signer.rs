//! The signing step.

use crate::crypto::Credential;
use crate::outcome::{FailureKind, Outcome};
use crate::traits::Cryptographer;
use crate::types::Document;

/// Sign `doc`'s body, producing a new document with the signed bytes.
///
/// A cryptographer failure becomes a failure carrying its message verbatim.
pub fn sign_document<C>(doc: Document, cryptographer: &C, credential: &Credential) -> Outcome<Document>
where
    C: Cryptographer + ?Sized,
{
    Outcome::of_kind(
        FailureKind::Signing,
        cryptographer.sign(doc.content(), credential),
    )
    .map(|signed| doc.with_content(signed))
}
