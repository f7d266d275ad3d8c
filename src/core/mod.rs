//! Core data types: configuration, history, and configuration errors.
//!
//! Everything in this module is plain data with pure lookups, except
//! [`StateHistory`] which owns a mutable cursor.

mod config;
mod error;
mod history;

pub use config::{MachineConfig, StateDescriptor};
pub use error::ConfigError;
pub use history::{HistoryEntry, StateHistory};
