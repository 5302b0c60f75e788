//! Value types flowing through the pipeline.
//!
//! Both types are immutable. A transform produces a new value instead of
//! editing fields in place.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte Blake3 fingerprint of some content.
///
/// Used to identify payloads in logs without printing them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest(pub [u8; 32]);

impl ContentDigest {
    /// Compute the digest of `data`.
    pub fn of(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentDigest({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// An unprocessed input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    name: String,
    content: Bytes,
}

impl FileContent {
    /// Create a file from a name and its raw bytes.
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// The file's identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw bytes.
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Blake3 fingerprint of the raw bytes.
    pub fn digest(&self) -> ContentDigest {
        ContentDigest::of(&self.content)
    }
}

/// A recognized document.
///
/// `created` is rendered with chrono's `Display`, e.g. `2024-02-29 12:00:00 UTC`,
/// wherever it appears in messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    name: String,
    content: Bytes,
    created: DateTime<Utc>,
    format: String,
}

impl Document {
    /// Create a document.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<Bytes>,
        created: DateTime<Utc>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            created,
            format: format.into(),
        }
    }

    /// The document's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The document body.
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// When the document was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// The format version string, e.g. `"4.0"`.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// A new document identical to this one except for its content.
    pub fn with_content(&self, content: impl Into<Bytes>) -> Self {
        Self {
            name: self.name.clone(),
            content: content.into(),
            created: self.created,
            format: self.format.clone(),
        }
    }

    /// Blake3 fingerprint of the body.
    pub fn digest(&self) -> ContentDigest {
        ContentDigest::of(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_with_content_replaces_only_content() {
        let doc = Document::new("report", b"plain".to_vec(), created(), "4.0");
        let signed = doc.with_content(b"signed".to_vec());

        assert_eq!(signed.name(), "report");
        assert_eq!(signed.created(), doc.created());
        assert_eq!(signed.format(), "4.0");
        assert_eq!(signed.content().as_ref(), b"signed");
        // The original is untouched
        assert_eq!(doc.content().as_ref(), b"plain");
    }

    #[test]
    fn test_created_canonical_text() {
        assert_eq!(created().to_string(), "2024-02-29 12:00:00 UTC");
    }

    #[test]
    fn test_digest_tracks_content() {
        let a = FileContent::new("a", b"same".to_vec());
        let b = FileContent::new("b", b"same".to_vec());
        let c = FileContent::new("a", b"other".to_vec());

        assert_eq!(a.digest(), b.digest());
        assert_ne!(a.digest(), c.digest());
        assert_eq!(a.digest().to_string().len(), 16);
    }

    #[test]
    fn test_document_serde_roundtrip() {
        let doc = Document::new("report", b"body".to_vec(), created(), "3.1");
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
