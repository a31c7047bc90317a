pub mod error;
pub mod listener;
pub mod manager;
pub mod queue;
pub mod response;
pub mod types;

use std::any::Any;
use std::fmt;

/// Execution priority assigned to a listener at attach time.
///
/// Higher values dispatch earlier. Ties among equal priorities dispatch in
/// attach order.
pub type Priority = i32;

/// Default priority used when a caller attaches without one.
///
/// It is the lowest possible priority, so listeners attached this way run
/// after every explicitly prioritized listener.
pub const PRIORITY_MIN: Priority = Priority::MIN;

/// Reserved event name whose listeners are invoked on every trigger,
/// regardless of the triggered event's name.
pub const EVENT_ALL: &str = "*";

/// Core event trait
pub trait Event: Any + fmt::Debug + Send + Sync {
    /// Get the name of this event
    fn name(&self) -> &str;

    /// Check whether a listener has stopped propagation of this event
    fn is_propagation_stopped(&self) -> bool;

    /// Stop propagation; no later listener in the current dispatch is invoked
    fn stop_propagation(&mut self);

    /// Cast to Any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Cast to mutable Any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Re-export important types
pub use error::EventSystemError;
pub use listener::{EventListener, EventResponse, ListenerCallback, event_callback};
pub use manager::{DefaultEventManager, EventManager, SharedEventManager, create_manager};
pub use queue::PriorityQueue;
pub use response::ResponseCollection;
pub use types::BasicEvent;

// Test module declaration
#[cfg(test)]
mod tests;
