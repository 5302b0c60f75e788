//! Capabilities the pipeline consumes.
//!
//! None of these are implemented by the pipeline itself. Callers inject them,
//! which keeps parsing formats, signature schemes and time sources out of the
//! core.

use chrono::{DateTime, Utc};

use crate::crypto::Credential;
use crate::error::{RecognizeError, SignError};
use crate::types::{Document, FileContent};

/// Parses raw file content into a [`Document`].
pub trait Recognizer {
    /// Recognize `file`, or fail with [`RecognizeError::NotRecognized`].
    fn recognize(&self, file: &FileContent) -> Result<Document, RecognizeError>;
}

/// Signs document bodies.
pub trait Cryptographer {
    /// Sign `content` with `credential`, returning the signed bytes.
    fn sign(&self, content: &[u8], credential: &Credential) -> Result<Vec<u8>, SignError>;
}

/// Supplies the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

impl<R: Recognizer + ?Sized> Recognizer for &R {
    fn recognize(&self, file: &FileContent) -> Result<Document, RecognizeError> {
        (**self).recognize(file)
    }
}

impl<C: Cryptographer + ?Sized> Cryptographer for &C {
    fn sign(&self, content: &[u8], credential: &Credential) -> Result<Vec<u8>, SignError> {
        (**self).sign(content, credential)
    }
}
