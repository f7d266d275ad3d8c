//! Configuration errors.

use thiserror::Error;

/// Problems found in a [`MachineConfig`](super::MachineConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Initial state '{initial}' is not defined in the configured states")]
    UnknownInitialState { initial: String },

    #[error("Transition '{from}' --{event}--> '{to}' targets an undefined state")]
    UnknownDestination {
        from: String,
        event: String,
        to: String,
    },
}
