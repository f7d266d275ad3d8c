//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a declarative macro for creating
//! machine configurations that are validated as a whole before use.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;

use crate::core::ConfigError;
use crate::machine::StateMachine;

/// Build a configuration and start a machine on it in one step.
///
/// # Example
///
/// ```
/// use statetrail::builder::{machine, ConfigBuilder};
///
/// let machine = machine(
///     ConfigBuilder::new()
///         .initial("off")
///         .transition("off", "toggle", "on")
///         .transition("on", "toggle", "off"),
/// )
/// .unwrap();
///
/// assert_eq!(machine.state(), "off");
/// ```
pub fn machine(builder: ConfigBuilder) -> Result<StateMachine, BuildError> {
    let config = builder.build()?;
    StateMachine::new(config).map_err(|error: ConfigError| BuildError::Invalid(vec![error]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_starts_from_built_config() {
        let mut machine = machine(
            ConfigBuilder::new()
                .initial("off")
                .transition("off", "toggle", "on")
                .transition("on", "toggle", "off"),
        )
        .unwrap();

        machine.trigger("toggle").unwrap();
        assert_eq!(machine.state(), "on");
    }

    #[test]
    fn machine_propagates_build_errors() {
        let result = machine(ConfigBuilder::new().state("a"));
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }
}
