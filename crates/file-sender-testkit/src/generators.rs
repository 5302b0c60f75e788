//! Proptest generators for property-based testing.

use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;

use file_sender_core::{Document, FileContent};

/// Formats drawn by [`format`]: the two accepted versions and some rejected ones.
pub const FORMATS: [&str; 6] = ["4.0", "3.1", "2.0", "4.1", "", "3.10"];

/// Generate a format version string.
pub fn format() -> impl Strategy<Value = String> {
    prop::sample::select(FORMATS.to_vec()).prop_map(String::from)
}

/// Generate a file name.
pub fn file_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,15}\\.(bin|xml|pdf)".prop_map(String::from)
}

/// Generate body bytes of specified max length.
pub fn body(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a document age in seconds, from one hour in the future to
/// about sixty days in the past.
pub fn age_secs() -> impl Strategy<Value = i64> {
    -3_600i64..=5_184_000i64
}

/// Parameters for generating a document.
#[derive(Debug, Clone)]
pub struct DocumentParams {
    pub name: String,
    pub format: String,
    pub age_secs: i64,
    pub body: Vec<u8>,
    /// Whether the recognizer should fail on this file.
    pub unrecognizable: bool,
}

impl DocumentParams {
    /// The raw input file for these parameters.
    pub fn file(&self) -> FileContent {
        FileContent::new(self.name.clone(), self.body.clone())
    }

    /// The document a recognizer should produce at `now`.
    pub fn document(&self, now: DateTime<Utc>) -> Document {
        Document::new(
            self.name.clone(),
            self.body.clone(),
            now - Duration::seconds(self.age_secs),
            self.format.clone(),
        )
    }
}

impl Arbitrary for DocumentParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (file_name(), format(), age_secs(), body(256), prop::bool::weighted(0.15))
            .prop_map(|(name, format, age_secs, body, unrecognizable)| DocumentParams {
                name,
                format,
                age_secs,
                body,
                unrecognizable,
            })
            .boxed()
    }
}

/// Generate a batch of document parameters with unique names.
pub fn batch(max_len: usize) -> impl Strategy<Value = Vec<DocumentParams>> {
    prop::collection::vec(any::<DocumentParams>(), 0..=max_len).prop_map(|mut params| {
        for (i, p) in params.iter_mut().enumerate() {
            p.name = format!("{i:03}-{}", p.name);
        }
        params
    })
}
