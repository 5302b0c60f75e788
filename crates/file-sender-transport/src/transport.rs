//! Transport abstraction for delivering documents.

use file_sender_core::Document;

use crate::error::Result;

/// Delivers a prepared document.
pub trait Sender {
    /// Send `document`, blocking until it is accepted or refused.
    fn send(&self, document: &Document) -> Result<()>;
}

impl<S: Sender + ?Sized> Sender for &S {
    fn send(&self, document: &Document) -> Result<()> {
        (**self).send(document)
    }
}

impl<S: Sender + ?Sized> Sender for Box<S> {
    fn send(&self, document: &Document) -> Result<()> {
        (**self).send(document)
    }
}

/// A simple in-memory transport for testing.
///
/// Records every delivered document in order.
pub mod memory {
    use super::*;
    use crate::error::SendError;
    use std::collections::HashSet;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Debug, Default)]
    struct State {
        delivered: Vec<Document>,
        attempts: usize,
        offline: Option<String>,
        rejected_names: HashSet<String>,
    }

    /// In-memory sender.
    #[derive(Debug, Default)]
    pub struct MemorySender {
        state: Mutex<State>,
    }

    impl MemorySender {
        /// Create an online sender with nothing delivered.
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a sender that fails every call with `reason`.
        pub fn offline(reason: impl Into<String>) -> Self {
            let sender = Self::new();
            sender.go_offline(reason);
            sender
        }

        /// Fail every following call with `reason`.
        pub fn go_offline(&self, reason: impl Into<String>) {
            self.lock().offline = Some(reason.into());
        }

        /// Accept calls again.
        pub fn go_online(&self) {
            self.lock().offline = None;
        }

        /// Refuse documents named `name`.
        pub fn reject(&self, name: impl Into<String>) {
            self.lock().rejected_names.insert(name.into());
        }

        /// Documents delivered so far, in delivery order.
        pub fn delivered(&self) -> Vec<Document> {
            self.lock().delivered.clone()
        }

        /// Number of `send` calls, successful or not.
        pub fn attempts(&self) -> usize {
            self.lock().attempts
        }

        fn lock(&self) -> MutexGuard<'_, State> {
            // A panic while holding the lock cannot leave State half-updated
            self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    impl Sender for MemorySender {
        fn send(&self, document: &Document) -> Result<()> {
            let mut state = self.lock();
            state.attempts += 1;

            if let Some(reason) = &state.offline {
                return Err(SendError::CannotSend(reason.clone()));
            }
            if state.rejected_names.contains(document.name()) {
                return Err(SendError::Rejected(document.name().to_string()));
            }

            tracing::trace!(document = document.name(), "memory sender accepted document");
            state.delivered.push(document.clone());
            Ok(())
        }
    }
}
