use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::event::error::EventSystemError;
use crate::event::listener::{EventListener, ListenerCallback};
use crate::event::queue::PriorityQueue;
use crate::event::response::ResponseCollection;
use crate::event::{EVENT_ALL, Event, PRIORITY_MIN, Priority};

/// Event manager interface
pub trait EventManager {
    /// Attach a listener to an event at the given priority.
    ///
    /// Higher priorities dispatch earlier; equal priorities dispatch in
    /// attach order. The queue for `event_name` is created on first attach.
    fn attach_with_priority(
        &mut self,
        event_name: &str,
        callback: ListenerCallback,
        priority: Priority,
    );

    /// Attach a listener at the default [`PRIORITY_MIN`] priority, so it
    /// runs after every explicitly prioritized listener.
    fn attach(&mut self, event_name: &str, callback: ListenerCallback) {
        self.attach_with_priority(event_name, callback, PRIORITY_MIN);
    }

    /// Detach a listener from an event.
    ///
    /// Detaching is not currently supported: this always returns `false`
    /// and removes nothing, for any arguments.
    fn detach(&mut self, event_name: &str, callback: &ListenerCallback) -> bool;

    /// Trigger an event.
    ///
    /// Invokes every listener attached under the event's name plus every
    /// listener attached under [`EVENT_ALL`], interleaved by priority, and
    /// returns their collected results. Dispatch runs over a snapshot taken
    /// up front and stops as soon as the event reports propagation stopped.
    /// Stored registration state is never mutated.
    fn trigger(&self, event: &mut dyn Event) -> ResponseCollection;

    /// Remove the queue for `event_name` and every listener in it.
    ///
    /// No-op if the name was never registered. The wildcard queue is only
    /// affected when `event_name` is [`EVENT_ALL`] itself.
    fn clear_listeners(&mut self, event_name: &str);

    /// An independent copy of the queue for `event_name`, or an empty queue
    /// if none is registered. Mutating the copy never affects this manager.
    fn get_listeners(&self, event_name: &str) -> PriorityQueue<EventListener>;
}

/// Run the execution queue against `event`, collecting each return value
/// until the queue is exhausted or the event stops propagation.
fn dispatch(queue: PriorityQueue<EventListener>, event: &mut dyn Event) -> ResponseCollection {
    let mut responses = ResponseCollection::new();

    for listener in queue.iter() {
        let Some(callback) = listener.callback() else {
            // TODO: detach the dead listener here once detach is implemented
            log::warn!("Skipping listener without a callback on '{}'", event.name());
            continue;
        };

        responses.push((**callback)(event));

        if event.is_propagation_stopped() {
            break;
        }
    }

    responses
}

/// Default implementation of [`EventManager`].
///
/// Owns the event-name to listener-queue mapping exclusively; every queue
/// handed out is a disposable copy. Single-threaded by ownership; wrap in a
/// [`SharedEventManager`] to share across threads.
pub struct DefaultEventManager {
    events: HashMap<String, PriorityQueue<EventListener>>,
}

impl DefaultEventManager {
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
        }
    }

    /// Insert a pre-built listener under its own event name and priority.
    pub fn attach_listener(&mut self, listener: EventListener) {
        let priority = listener.priority();
        self.events
            .entry(listener.event_name().to_string())
            .or_default()
            .insert(listener, priority);
    }
}

// Manual Debug implementation, queue contents stay opaque
impl fmt::Debug for DefaultEventManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listener_count: usize = self.events.values().map(|queue| queue.len()).sum();
        f.debug_struct("DefaultEventManager")
            .field("event_count", &self.events.len())
            .field("listener_count", &listener_count)
            .finish()
    }
}

impl EventManager for DefaultEventManager {
    fn attach_with_priority(
        &mut self,
        event_name: &str,
        callback: ListenerCallback,
        priority: Priority,
    ) {
        log::trace!("Attaching listener to '{event_name}' at priority {priority}");
        self.attach_listener(EventListener::new(event_name, callback, priority));
    }

    fn detach(&mut self, event_name: &str, _callback: &ListenerCallback) -> bool {
        log::trace!("Detach requested for '{event_name}' (not supported)");
        false
    }

    fn trigger(&self, event: &mut dyn Event) -> ResponseCollection {
        let queue = self
            .get_listeners(event.name())
            .merge(&self.get_listeners(EVENT_ALL));
        log::debug!("Triggering '{}' for {} listener(s)", event.name(), queue.len());
        dispatch(queue, event)
    }

    fn clear_listeners(&mut self, event_name: &str) {
        log::debug!("Clearing listeners for '{event_name}'");
        self.events.remove(event_name);
    }

    fn get_listeners(&self, event_name: &str) -> PriorityQueue<EventListener> {
        self.events.get(event_name).cloned().unwrap_or_default()
    }
}

impl Default for DefaultEventManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe shared event manager.
///
/// Clones share one listener registry. Registration is guarded by a
/// read/write lock; a poisoned lock surfaces as
/// [`EventSystemError::ManagerPoisoned`] instead of a panic.
#[derive(Clone)]
pub struct SharedEventManager {
    inner: Arc<RwLock<DefaultEventManager>>,
}

impl SharedEventManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(DefaultEventManager::new())),
        }
    }

    /// Attach a listener at the default [`PRIORITY_MIN`] priority.
    pub fn attach(
        &self,
        event_name: &str,
        callback: ListenerCallback,
    ) -> Result<(), EventSystemError> {
        self.attach_with_priority(event_name, callback, PRIORITY_MIN)
    }

    /// Attach a listener to an event at the given priority.
    pub fn attach_with_priority(
        &self,
        event_name: &str,
        callback: ListenerCallback,
        priority: Priority,
    ) -> Result<(), EventSystemError> {
        let mut manager = self.write("attach")?;
        manager.attach_with_priority(event_name, callback, priority);
        Ok(())
    }

    /// Detach a listener from an event.
    ///
    /// Always `Ok(false)` today; see [`EventManager::detach`].
    pub fn detach(
        &self,
        event_name: &str,
        callback: &ListenerCallback,
    ) -> Result<bool, EventSystemError> {
        let mut manager = self.write("detach")?;
        Ok(manager.detach(event_name, callback))
    }

    /// Trigger an event.
    ///
    /// The registry is read-locked only while the execution queue is
    /// snapshotted; callbacks run after the lock is released. A callback may
    /// therefore attach, detach, or trigger through a clone of this manager
    /// without deadlocking, and such reentrant changes are invisible to the
    /// dispatch already in flight.
    pub fn trigger(&self, event: &mut dyn Event) -> Result<ResponseCollection, EventSystemError> {
        let queue = {
            let manager = self.read("trigger")?;
            manager
                .get_listeners(event.name())
                .merge(&manager.get_listeners(EVENT_ALL))
        };
        log::debug!("Triggering '{}' for {} listener(s)", event.name(), queue.len());
        Ok(dispatch(queue, event))
    }

    /// Remove the queue for `event_name` and every listener in it.
    pub fn clear_listeners(&self, event_name: &str) -> Result<(), EventSystemError> {
        let mut manager = self.write("clear_listeners")?;
        manager.clear_listeners(event_name);
        Ok(())
    }

    /// An independent copy of the queue for `event_name`.
    pub fn get_listeners(
        &self,
        event_name: &str,
    ) -> Result<PriorityQueue<EventListener>, EventSystemError> {
        let manager = self.read("get_listeners")?;
        Ok(manager.get_listeners(event_name))
    }

    fn read(
        &self,
        operation: &'static str,
    ) -> Result<RwLockReadGuard<'_, DefaultEventManager>, EventSystemError> {
        self.inner
            .read()
            .map_err(|_| EventSystemError::ManagerPoisoned { operation })
    }

    fn write(
        &self,
        operation: &'static str,
    ) -> Result<RwLockWriteGuard<'_, DefaultEventManager>, EventSystemError> {
        self.inner
            .write()
            .map_err(|_| EventSystemError::ManagerPoisoned { operation })
    }
}

impl Default for SharedEventManager {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Debug implementation
impl fmt::Debug for SharedEventManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedEventManager").finish_non_exhaustive()
    }
}

/// Create a new shared event manager instance
pub fn create_manager() -> SharedEventManager {
    SharedEventManager::new()
}
