//! The railway container: a success value or a failure message.
//!
//! Steps are chained with [`Outcome::then`]. The first failure short-circuits
//! every later step and travels to the end of the chain untouched, where
//! [`Outcome::refine_error`] can prefix it with context.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which stage produced a failure.
///
/// Carried alongside the message for callers that want to branch on it.
/// The message text never depends on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Content could not be parsed into a document.
    Recognition,
    /// Document format is not in the accepted set.
    Format,
    /// Document is older than the freshness window.
    Timestamp,
    /// Cryptographic signing failed.
    Signing,
    /// Delivery failed.
    Transport,
    /// Failure created without a specific stage.
    Unspecified,
}

impl FailureKind {
    /// Stable lowercase name, used in log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Recognition => "recognition",
            FailureKind::Format => "format",
            FailureKind::Timestamp => "timestamp",
            FailureKind::Signing => "signing",
            FailureKind::Transport => "transport",
            FailureKind::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure message with its originating stage.
///
/// Messages built directly are never empty. A message captured from a
/// collaborator error is kept verbatim, even when empty, so that a later
/// [`Outcome::refine_error`] prefix is the whole text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    kind: FailureKind,
    message: String,
}

impl Failure {
    /// Create a failure without a specific stage.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(FailureKind::Unspecified, message)
    }

    /// Create a failure attributed to `kind`.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    pub fn with_kind(kind: FailureKind, message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(!message.is_empty(), "failure message must not be empty");
        Self { kind, message }
    }

    fn captured(kind: FailureKind, message: String) -> Self {
        Self { kind, message }
    }

    /// The stage that produced this failure.
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume and return the message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Prefix the message. No separator is inserted.
    pub fn refine(self, prefix: &str) -> Self {
        Self {
            kind: self.kind,
            message: format!("{prefix}{}", self.message),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Failure {}

/// Either a success value or a [`Failure`]. Never both.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The step produced a value.
    Success(T),
    /// The step, or one before it, failed.
    Failure(Failure),
}

impl<T> Outcome<T> {
    /// Wrap a value as success.
    pub fn ok(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Wrap a message as failure.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    pub fn fail(message: impl Into<String>) -> Self {
        Outcome::Failure(Failure::new(message))
    }

    /// Wrap a message as failure of a given kind.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    pub fn fail_with(kind: FailureKind, message: impl Into<String>) -> Self {
        Outcome::Failure(Failure::with_kind(kind, message))
    }

    /// Capture a standard `Result`, keeping the error's display text verbatim.
    pub fn of<E>(result: Result<T, E>) -> Self
    where
        E: fmt::Display,
    {
        Self::of_kind(FailureKind::Unspecified, result)
    }

    /// Capture a standard `Result` and attribute its error to `kind`.
    ///
    /// The error's display text is kept verbatim, including an empty one.
    pub fn of_kind<E>(kind: FailureKind, result: Result<T, E>) -> Self
    where
        E: fmt::Display,
    {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(e) => Outcome::Failure(Failure::captured(kind, e.to_string())),
        }
    }

    /// Run `step` on the success value and adopt its outcome.
    ///
    /// On failure `step` is not called and the failure is passed on unchanged.
    pub fn then<U, F>(self, step: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Success(value) => step(value),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transform the success value with an infallible function.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Prefix a failure message with `prefix`. Success passes through.
    pub fn refine_error(self, prefix: &str) -> Self {
        match self {
            Outcome::Failure(failure) => Outcome::Failure(failure.refine(prefix)),
            success => success,
        }
    }

    /// Rewrite a failure message. The kind is kept.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns an empty message.
    pub fn replace_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        match self {
            Outcome::Failure(failure) => {
                let message = f(failure.message());
                Outcome::Failure(Failure::with_kind(failure.kind(), message))
            }
            success => success,
        }
    }

    /// Observe a failure without altering it.
    pub fn on_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(&Failure),
    {
        if let Outcome::Failure(failure) = &self {
            f(failure);
        }
        self
    }

    /// True if this holds a value.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// True if this holds a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        self.failure().map(Failure::message)
    }

    /// The failure kind, if any.
    pub fn kind(&self) -> Option<FailureKind> {
        self.failure().map(Failure::kind)
    }

    /// The failure, if any.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// The success value, or `default` on failure.
    pub fn value_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Convert into a standard `Result` for use with `?`.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: fmt::Display,
{
    fn from(result: Result<T, E>) -> Self {
        Outcome::of(result)
    }
}
