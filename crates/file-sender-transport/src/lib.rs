//! # File Sender Transport
//!
//! Delivery of prepared documents.
//!
//! The [`Sender`] trait is the only thing the orchestrator needs from a
//! transport. Implementations may post over HTTP, drop files on a share, or
//! anything else; a call blocks until the document is delivered or refused.
//!
//! [`memory::MemorySender`] records deliveries in memory and can be switched
//! offline, which is what the tests use.

pub mod error;
pub mod transport;

pub use error::SendError;
pub use transport::memory::MemorySender;
pub use transport::Sender;
