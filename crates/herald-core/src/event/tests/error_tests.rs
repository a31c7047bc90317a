#![cfg(test)]

use crate::event::error::EventSystemError;

#[test]
fn test_manager_poisoned_display() {
    let err = EventSystemError::ManagerPoisoned {
        operation: "attach",
    };
    assert_eq!(
        format!("{err}"),
        "Event manager lock poisoned during 'attach'"
    );
}

#[test]
fn test_error_implements_std_error() {
    fn assert_error<E: std::error::Error>(_err: &E) {}

    let err = EventSystemError::ManagerPoisoned {
        operation: "trigger",
    };
    assert_error(&err);
}
