use std::any::Any;

use crate::event::Event;

/// Minimal named event carrying nothing but its propagation flag.
///
/// Sufficient for triggers whose listeners only care that the event fired.
/// Events with payloads implement [`Event`] directly and expose their data
/// to callbacks through `as_any` downcasting.
#[derive(Debug, Clone)]
pub struct BasicEvent {
    name: String,
    propagation_stopped: bool,
}

impl BasicEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            propagation_stopped: false,
        }
    }
}

impl Event for BasicEvent {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
