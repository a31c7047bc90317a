//! # Event System Errors
//!
//! Defines error types specific to the event system.
//!
//! The dispatch pipeline itself is infallible by design: unregistered names
//! yield empty queues, listeners without callbacks are skipped, and callback
//! panics are deliberately not caught. The only runtime failure surface is
//! the lock around [`SharedEventManager`](crate::event::SharedEventManager),
//! which reports poisoning through [`EventSystemError`].
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventSystemError {
    #[error("Event manager lock poisoned during '{operation}'")]
    ManagerPoisoned { operation: &'static str },
}
