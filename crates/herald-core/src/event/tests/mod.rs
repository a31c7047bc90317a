#[cfg(test)]
mod types_tests;
#[cfg(test)]
mod error_tests;

#[cfg(test)]
mod tests {
    use crate::event::{EVENT_ALL, PRIORITY_MIN, Priority};

    #[test]
    fn test_reserved_name_and_default_priority() {
        assert_eq!(EVENT_ALL, "*");
        assert_eq!(PRIORITY_MIN, Priority::MIN);
    }

    #[test]
    fn test_default_constructions_are_empty() {
        use crate::event::manager::{DefaultEventManager, EventManager, SharedEventManager};
        use crate::event::queue::PriorityQueue;

        let manager = DefaultEventManager::default();
        assert!(manager.get_listeners("anything").is_empty());

        let shared = SharedEventManager::default();
        assert!(shared.get_listeners("anything").unwrap().is_empty());

        let queue: PriorityQueue<u8> = PriorityQueue::default();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_manager_usable_as_trait_object() {
        use crate::event::Event;
        use crate::event::listener::event_callback;
        use crate::event::manager::{DefaultEventManager, EventManager};
        use crate::event::types::BasicEvent;

        let mut manager = DefaultEventManager::new();
        let dyn_manager: &mut dyn EventManager = &mut manager;
        dyn_manager.attach("ping", event_callback(|_event: &mut dyn Event| ()));

        let mut event = BasicEvent::new("ping");
        assert_eq!(dyn_manager.trigger(&mut event).len(), 1);
    }
}
