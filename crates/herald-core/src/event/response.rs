use std::fmt;
use std::slice;
use std::vec;

use crate::event::listener::EventResponse;

/// Ordered accumulation of listener return values from one trigger call.
///
/// One entry per listener actually invoked, in invocation order; listeners
/// skipped during dispatch contribute nothing. Owned by the caller of
/// `trigger` once returned.
pub struct ResponseCollection {
    responses: Vec<EventResponse>,
}

impl ResponseCollection {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
        }
    }

    /// Append the return value of an invoked listener.
    pub fn push(&mut self, response: EventResponse) {
        self.responses.push(response);
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// The first collected response, if any listener ran.
    pub fn first(&self) -> Option<&EventResponse> {
        self.responses.first()
    }

    /// The most recently collected response.
    ///
    /// When a listener stopped propagation, this is that listener's result.
    pub fn last(&self) -> Option<&EventResponse> {
        self.responses.last()
    }

    pub fn get(&self, index: usize) -> Option<&EventResponse> {
        self.responses.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, EventResponse> {
        self.responses.iter()
    }
}

impl Default for ResponseCollection {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Debug implementation, the collected values are opaque
impl fmt::Debug for ResponseCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseCollection")
            .field("len", &self.responses.len())
            .finish()
    }
}

impl IntoIterator for ResponseCollection {
    type Item = EventResponse;
    type IntoIter = vec::IntoIter<EventResponse>;

    fn into_iter(self) -> Self::IntoIter {
        self.responses.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResponseCollection {
    type Item = &'a EventResponse;
    type IntoIter = slice::Iter<'a, EventResponse>;

    fn into_iter(self) -> Self::IntoIter {
        self.responses.iter()
    }
}
