//! # File Sender
//!
//! Prepare documents for transmission and hand them to a transport, recording
//! one outcome per file.
//!
//! ## Overview
//!
//! Each file runs through a railway of fallible steps:
//!
//! ```text
//! FileContent -> recognize -> check format -> check timestamp -> sign -> send
//! ```
//!
//! The first failing step ends that file's run with a single message. Other
//! files are unaffected. Preparation failures start with
//! `"Can't prepare file to send. "`, transport failures with `"Can't send. "`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use file_sender::{FileSender, FileContent};
//! use file_sender::core::{Credential, Ed25519Cryptographer, SystemClock};
//! use file_sender::transport::MemorySender;
//!
//! let sender = FileSender::new(my_recognizer, Ed25519Cryptographer, MemorySender::new(), SystemClock);
//! let credential = Credential::generate("acme");
//!
//! for result in sender.send_files(&files, &credential) {
//!     if let Some(error) = result.error() {
//!         eprintln!("{}: {}", result.file().name(), error);
//!     }
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `file_sender::core` - Outcomes, documents, validation and signing
//! - `file_sender::transport` - The `Sender` trait and in-memory sender

pub mod config;
pub mod error;
pub mod report;
pub mod sender;

// Re-export component crates
pub use file_sender_core as core;
pub use file_sender_transport as transport;

pub use config::FileSenderConfig;
pub use error::{ConfigError, Result};
pub use report::{FileSendResult, SendReport};
pub use sender::{FileSender, SEND_ERROR_PREFIX};

// Re-export commonly used core types
pub use file_sender_core::{
    Clock, Credential, Cryptographer, Document, FailureKind, FileContent, Outcome, Recognizer,
};
pub use file_sender_transport::{SendError, Sender};
