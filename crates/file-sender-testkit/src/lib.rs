//! # File Sender Testkit
//!
//! Testing utilities for the file sender.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a fixed clock, a deterministic credential and document builders
//! - **Collaborators**: stub, failing and spy recognizers, cryptographers and senders
//! - **Generators**: Proptest strategies for documents and files
//!
//! ## Test Fixtures
//!
//! ```rust
//! use file_sender_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let doc = fixture.fresh_document("report", "4.0");
//! assert_eq!(doc.format(), "4.0");
//! ```
//!
//! ## Step Isolation
//!
//! Wrap a collaborator in a spy to assert it was never reached:
//!
//! ```rust
//! use file_sender_testkit::collaborators::SpyCryptographer;
//! use file_sender_core::Ed25519Cryptographer;
//!
//! let spy = SpyCryptographer::new(Ed25519Cryptographer);
//! assert_eq!(spy.calls(), 0);
//! ```

pub mod collaborators;
pub mod fixtures;
pub mod generators;

pub use collaborators::{
    FailingCryptographer, FailingRecognizer, FailingSender, SpyClock, SpyCryptographer,
    SpyRecognizer, SpySender, StubRecognizer,
};
pub use fixtures::{fixture_now, TestFixture};
pub use generators::{DocumentParams, FORMATS};
