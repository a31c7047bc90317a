// Priority-ordered, name-keyed event dispatch.
//
// Listeners are attached under event names with an execution priority and
// invoked highest-priority-first when an event with that name is triggered.
// Listeners attached under the reserved wildcard name run on every trigger.
pub mod event;

// Re-export key public types/traits for easier use by applications
pub use event::manager::{DefaultEventManager, EventManager, SharedEventManager, create_manager};
pub use event::{EVENT_ALL, Event, PRIORITY_MIN, Priority};
pub use event::{
    EventListener, EventResponse, EventSystemError, ListenerCallback, PriorityQueue,
    ResponseCollection, event_callback,
};
pub use event::types::BasicEvent;
