//! The state machine and its transition errors.

mod error;
#[allow(clippy::module_inception)]
mod machine;

pub use error::TransitionError;
pub use machine::StateMachine;
