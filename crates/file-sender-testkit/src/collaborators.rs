//! Stub and spy collaborators.
//!
//! Spies wrap a real collaborator and count invocations, so tests can assert
//! that a short-circuited step was never reached.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use file_sender_core::{
    Clock, Credential, Cryptographer, Document, FileContent, RecognizeError, Recognizer,
    SignError,
};
use file_sender_transport::{SendError, Sender};

/// Recognizes files by name from a fixed table.
///
/// Unknown names fail with `"unknown file: {name}"`.
#[derive(Debug, Default, Clone)]
pub struct StubRecognizer {
    table: HashMap<String, Result<Document, RecognizeError>>,
}

impl StubRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognize a file named like each document as that document.
    pub fn from_documents(docs: impl IntoIterator<Item = Document>) -> Self {
        let mut stub = Self::new();
        for doc in docs {
            stub = stub.with_document(doc);
        }
        stub
    }

    /// Recognize the file named `doc.name()` as `doc`.
    pub fn with_document(mut self, doc: Document) -> Self {
        self.table.insert(doc.name().to_string(), Ok(doc));
        self
    }

    /// Fail to recognize the file named `name` with `message`.
    pub fn with_failure(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.table.insert(
            name.into(),
            Err(RecognizeError::NotRecognized(message.into())),
        );
        self
    }
}

impl Recognizer for StubRecognizer {
    fn recognize(&self, file: &FileContent) -> Result<Document, RecognizeError> {
        match self.table.get(file.name()) {
            Some(entry) => entry.clone(),
            None => Err(RecognizeError::NotRecognized(format!(
                "unknown file: {}",
                file.name()
            ))),
        }
    }
}

/// Fails every recognition with the same message.
#[derive(Debug, Clone)]
pub struct FailingRecognizer(pub String);

impl Recognizer for FailingRecognizer {
    fn recognize(&self, _: &FileContent) -> Result<Document, RecognizeError> {
        Err(RecognizeError::NotRecognized(self.0.clone()))
    }
}

/// Fails every signature with the same message.
#[derive(Debug, Clone)]
pub struct FailingCryptographer(pub String);

impl Cryptographer for FailingCryptographer {
    fn sign(&self, _: &[u8], _: &Credential) -> Result<Vec<u8>, SignError> {
        Err(SignError::CannotSign(self.0.clone()))
    }
}

/// Counts calls to a wrapped recognizer.
#[derive(Debug, Default)]
pub struct SpyRecognizer<R> {
    inner: R,
    calls: AtomicUsize,
}

impl<R> SpyRecognizer<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `recognize` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<R: Recognizer> Recognizer for SpyRecognizer<R> {
    fn recognize(&self, file: &FileContent) -> Result<Document, RecognizeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.recognize(file)
    }
}

/// Counts calls to a wrapped cryptographer.
#[derive(Debug, Default)]
pub struct SpyCryptographer<C> {
    inner: C,
    calls: AtomicUsize,
}

impl<C> SpyCryptographer<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `sign` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<C: Cryptographer> Cryptographer for SpyCryptographer<C> {
    fn sign(&self, content: &[u8], credential: &Credential) -> Result<Vec<u8>, SignError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.sign(content, credential)
    }
}

/// Fails every delivery with the same message.
#[derive(Debug, Clone)]
pub struct FailingSender(pub String);

impl Sender for FailingSender {
    fn send(&self, _: &Document) -> Result<(), SendError> {
        Err(SendError::CannotSend(self.0.clone()))
    }
}

/// Counts calls to a wrapped sender.
#[derive(Debug, Default)]
pub struct SpySender<S> {
    inner: S,
    calls: AtomicUsize,
}

impl<S> SpySender<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `send` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<S: Sender> Sender for SpySender<S> {
    fn send(&self, document: &Document) -> Result<(), SendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.send(document)
    }
}

/// A fixed clock that counts reads.
///
/// The timestamp check is the only step that reads the clock, so the count
/// shows whether it ran.
#[derive(Debug)]
pub struct SpyClock {
    at: DateTime<Utc>,
    reads: AtomicUsize,
}

impl SpyClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            at,
            reads: AtomicUsize::new(0),
        }
    }

    /// Number of `now` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for SpyClock {
    fn now(&self) -> DateTime<Utc> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TestFixture;
    use file_sender_core::Ed25519Cryptographer;
    use file_sender_transport::MemorySender;

    #[test]
    fn test_stub_recognizer_by_name() {
        let fixture = TestFixture::new();
        let doc = fixture.fresh_document("a", "4.0");
        let stub = StubRecognizer::from_documents([doc.clone()]).with_failure("b", "corrupt");

        assert_eq!(stub.recognize(&fixture.file("a")), Ok(doc));
        assert_eq!(
            stub.recognize(&fixture.file("b")),
            Err(RecognizeError::NotRecognized("corrupt".into()))
        );
        assert_eq!(
            stub.recognize(&fixture.file("c")).unwrap_err().to_string(),
            "unknown file: c"
        );
    }

    #[test]
    fn test_spies_count_calls() {
        let fixture = TestFixture::new();
        let recognizer = SpyRecognizer::new(FailingRecognizer("nope".into()));
        let cryptographer = SpyCryptographer::new(Ed25519Cryptographer);

        assert!(recognizer.recognize(&fixture.file("a")).is_err());
        assert!(recognizer.recognize(&fixture.file("b")).is_err());
        assert!(cryptographer.sign(b"x", &fixture.credential).is_ok());

        assert_eq!(recognizer.calls(), 2);
        assert_eq!(cryptographer.calls(), 1);
    }

    #[test]
    fn test_spy_clock() {
        let fixture = TestFixture::new();
        let clock = SpyClock::new(fixture.now);
        assert_eq!(clock.reads(), 0);
        assert_eq!(clock.now(), fixture.now);
        assert_eq!(clock.reads(), 1);
    }

    #[test]
    fn test_spy_sender_counts_every_attempt() {
        let fixture = TestFixture::new();
        let doc = fixture.fresh_document("a", "4.0");
        let memory = SpySender::new(MemorySender::new());
        let failing = SpySender::new(FailingSender("link down".into()));

        assert!(memory.send(&doc).is_ok());
        assert_eq!(
            failing.send(&doc).unwrap_err().to_string(),
            "link down"
        );
        assert!(failing.send(&doc).is_err());

        assert_eq!(memory.calls(), 1);
        assert_eq!(failing.calls(), 2);
    }

    #[test]
    fn test_failing_cryptographer_message() {
        let fixture = TestFixture::new();
        let err = FailingCryptographer("card removed".into())
            .sign(b"x", &fixture.credential)
            .unwrap_err();
        assert_eq!(err.to_string(), "card removed");
    }
}
