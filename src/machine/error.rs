//! Transition errors.

use thiserror::Error;

/// Errors returned by the state-changing operations of a
/// [`StateMachine`](super::StateMachine).
///
/// A failed operation never modifies the machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The requested state is not part of the configuration
    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    /// The current state has no transition for the event
    #[error("No transition for event '{event}' from state '{from}'")]
    InvalidTransition { from: String, event: String },
}
