use std::any::Any;

use crate::event::Event;
use crate::event::types::BasicEvent;

#[test]
fn test_basic_event_name() {
    let event = BasicEvent::new("user.created");
    assert_eq!(event.name(), "user.created");
}

#[test]
fn test_propagation_flag_starts_clear_and_sticks() {
    let mut event = BasicEvent::new("user.created");
    assert!(!event.is_propagation_stopped());

    event.stop_propagation();
    assert!(event.is_propagation_stopped());

    // There is no reset; stopping again changes nothing.
    event.stop_propagation();
    assert!(event.is_propagation_stopped());
}

#[test]
fn test_custom_event_payload_via_downcast() {
    #[derive(Debug)]
    struct OrderPlaced {
        total_cents: u64,
        propagation_stopped: bool,
    }

    impl Event for OrderPlaced {
        fn name(&self) -> &str {
            "order.placed"
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

    let event = OrderPlaced {
        total_cents: 1299,
        propagation_stopped: false,
    };
    let as_event: &dyn Event = &event;

    let concrete = as_event
        .as_any()
        .downcast_ref::<OrderPlaced>()
        .expect("downcast to the concrete event type should succeed");
    assert_eq!(concrete.total_cents, 1299);
    assert_eq!(as_event.name(), "order.placed");
}

#[test]
fn test_cloned_event_does_not_share_the_flag() {
    let mut original = BasicEvent::new("user.created");
    let copy = original.clone();

    original.stop_propagation();
    assert!(!copy.is_propagation_stopped());
}
