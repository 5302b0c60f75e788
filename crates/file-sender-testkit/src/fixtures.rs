//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use file_sender_core::{Credential, Document, FileContent, FixedClock};

use crate::collaborators::StubRecognizer;

/// The instant fixtures treat as "now": 2024-03-31 12:00:00 UTC.
///
/// Chosen so that one calendar month earlier is the last day of a leap
/// February.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap()
}

/// A test fixture with a fixed clock and a deterministic credential.
pub struct TestFixture {
    pub now: DateTime<Utc>,
    pub credential: Credential,
}

impl TestFixture {
    /// Create a fixture at [`fixture_now`].
    pub fn new() -> Self {
        Self::at(fixture_now())
    }

    /// Create a fixture at a chosen instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            credential: Credential::from_seed("testkit", &[0x42; 32]),
        }
    }

    /// A clock frozen at the fixture's instant.
    pub fn clock(&self) -> FixedClock {
        FixedClock::new(self.now)
    }

    /// The exact instant a document must be newer than.
    pub fn cutoff(&self) -> DateTime<Utc> {
        file_sender_core::freshness_cutoff(self.now, 1).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// A document created one day before now.
    pub fn fresh_document(&self, name: &str, format: &str) -> Document {
        self.document(name, format, self.now - Duration::days(1))
    }

    /// A document created exactly at the freshness cutoff.
    pub fn stale_document(&self, name: &str, format: &str) -> Document {
        self.document(name, format, self.cutoff())
    }

    /// A document with an explicit creation time.
    pub fn document(&self, name: &str, format: &str, created: DateTime<Utc>) -> Document {
        Document::new(name, format!("body of {name}").into_bytes(), created, format)
    }

    /// A raw file named `name`.
    pub fn file(&self, name: &str) -> FileContent {
        FileContent::new(name, format!("raw {name}").into_bytes())
    }

    /// A recognizer mapping each of `docs` from the file with the same name.
    pub fn recognizer(&self, docs: impl IntoIterator<Item = Document>) -> StubRecognizer {
        StubRecognizer::from_documents(docs)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
