//! Per-file outcome records and batch summaries.

use std::collections::BTreeMap;

use file_sender_core::{Document, FailureKind, FileContent, Outcome};
use serde::Serialize;

/// The terminal record for one input file.
///
/// Always holds the original input, never a transformed document. Success is
/// the absence of an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSendResult {
    file: FileContent,
    error: Option<String>,
    kind: Option<FailureKind>,
}

impl FileSendResult {
    /// A successful delivery of `file`.
    pub fn success(file: FileContent) -> Self {
        Self {
            file,
            error: None,
            kind: None,
        }
    }

    /// A failed run for `file`.
    pub fn failure(file: FileContent, kind: FailureKind, error: impl Into<String>) -> Self {
        Self {
            file,
            error: Some(error.into()),
            kind: Some(kind),
        }
    }

    /// Record the final outcome of `file`'s run.
    pub fn from_outcome(file: FileContent, outcome: Outcome<Document>) -> Self {
        match outcome {
            Outcome::Success(_) => Self::success(file),
            Outcome::Failure(failure) => {
                let kind = failure.kind();
                Self::failure(file, kind, failure.into_message())
            }
        }
    }

    /// The original input.
    pub fn file(&self) -> &FileContent {
        &self.file
    }

    /// The failure message, if the run failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Which stage failed, if the run failed.
    pub fn kind(&self) -> Option<FailureKind> {
        self.kind
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Counts over a batch of [`FileSendResult`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SendReport {
    /// Number of files processed.
    pub total: usize,
    /// Files delivered.
    pub succeeded: usize,
    /// Files that failed at any stage.
    pub failed: usize,
    /// Failures per stage.
    pub failures_by_kind: BTreeMap<FailureKind, usize>,
}

impl SendReport {
    /// Summarize `results`.
    pub fn from_results(results: &[FileSendResult]) -> Self {
        let mut report = Self::default();
        for result in results {
            report.record(result);
        }
        report
    }

    /// Add one result to the counts.
    pub fn record(&mut self, result: &FileSendResult) {
        self.total += 1;
        if result.is_success() {
            self.succeeded += 1;
            return;
        }
        self.failed += 1;
        let kind = result.kind().unwrap_or(FailureKind::Unspecified);
        *self.failures_by_kind.entry(kind).or_insert(0) += 1;
    }

    /// True if every file was delivered.
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}
