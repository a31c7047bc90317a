use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::event::{Event, Priority};

/// Value returned by a listener callback.
///
/// Callbacks may return anything; results are collected opaquely in a
/// [`ResponseCollection`](crate::event::ResponseCollection) and downcast by
/// the caller that triggered the event.
pub type EventResponse = Box<dyn Any + Send>;

/// Callback invoked with the triggered event as its sole argument.
///
/// Shared via `Arc` so listener records stay cheap to clone into the
/// snapshot queues handed out for dispatch.
pub type ListenerCallback = Arc<dyn Fn(&mut dyn Event) -> EventResponse + Send + Sync>;

/// Helper function to wrap a plain closure as a [`ListenerCallback`],
/// boxing whatever it returns
pub fn event_callback<F, R>(f: F) -> ListenerCallback
where
    F: Fn(&mut dyn Event) -> R + Send + Sync + 'static,
    R: Any + Send,
{
    Arc::new(move |event: &mut dyn Event| -> EventResponse { Box::new(f(event)) })
}

/// Immutable record binding an event name, a callback, and a priority.
///
/// Created on attach and owned by the queue it is inserted into.
#[derive(Clone)]
pub struct EventListener {
    event_name: String,
    callback: Option<ListenerCallback>,
    priority: Priority,
}

impl EventListener {
    /// Create a listener for `event_name` with the given callback.
    pub fn new(
        event_name: impl Into<String>,
        callback: ListenerCallback,
        priority: Priority,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            callback: Some(callback),
            priority,
        }
    }

    /// Create a listener with no callback.
    ///
    /// Dispatch skips such a listener silently instead of invoking it.
    pub fn without_callback(event_name: impl Into<String>, priority: Priority) -> Self {
        Self {
            event_name: event_name.into(),
            callback: None,
            priority,
        }
    }

    /// The event name this listener was attached under.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// The callback to invoke, if one is present.
    pub fn callback(&self) -> Option<&ListenerCallback> {
        self.callback.as_ref()
    }

    /// The execution priority given at attach time.
    pub fn priority(&self) -> Priority {
        self.priority
    }
}

// Manual Debug implementation, the callback itself is opaque
impl fmt::Debug for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListener")
            .field("event_name", &self.event_name)
            .field("priority", &self.priority)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
