//! Document validation steps: format version and freshness.
//!
//! Each check takes a [`Document`] by value and hands it back unchanged on
//! success, so it can be chained with [`Outcome::then`].

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::outcome::{FailureKind, Outcome};
use crate::types::Document;

/// Format versions accepted by default.
pub const DEFAULT_ACCEPTED_FORMATS: [&str; 2] = ["4.0", "3.1"];

/// Default freshness window in calendar months.
pub const DEFAULT_MAX_AGE_MONTHS: u32 = 1;

/// What the validation steps accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Format version strings that pass the format check.
    pub accepted_formats: Vec<String>,
    /// Documents created at or before `now - max_age_months` are too old.
    pub max_age_months: u32,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            accepted_formats: DEFAULT_ACCEPTED_FORMATS.iter().map(|f| f.to_string()).collect(),
            max_age_months: DEFAULT_MAX_AGE_MONTHS,
        }
    }
}

impl ValidationPolicy {
    /// True if `format` is one of the accepted versions.
    pub fn accepts_format(&self, format: &str) -> bool {
        self.accepted_formats.iter().any(|f| f == format)
    }
}

/// Pass `doc` through if its format version is accepted.
pub fn check_format(doc: Document, policy: &ValidationPolicy) -> Outcome<Document> {
    if policy.accepts_format(doc.format()) {
        return Outcome::ok(doc);
    }
    Outcome::fail_with(
        FailureKind::Format,
        format!("Invalid format version: {}", doc.format()),
    )
}

/// The instant a document must be strictly newer than.
///
/// Subtracts calendar months, clamping to the last day of a shorter month:
/// March 31 minus one month is the last day of February. Returns `None` when
/// the result would fall before the earliest representable instant.
pub fn freshness_cutoff(now: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    now.checked_sub_months(Months::new(months))
}

/// Pass `doc` through if it was created strictly after the freshness cutoff.
pub fn check_timestamp(
    doc: Document,
    now: DateTime<Utc>,
    policy: &ValidationPolicy,
) -> Outcome<Document> {
    match freshness_cutoff(now, policy.max_age_months) {
        Some(cutoff) if doc.created() <= cutoff => Outcome::fail_with(
            FailureKind::Timestamp,
            format!("Too old document: {}", doc.created()),
        ),
        // No representable cutoff means nothing can be older than it
        _ => Outcome::ok(doc),
    }
}
