//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::MachineConfig;
use std::collections::BTreeMap;
use stillwater::validation::Validation;

/// Builder for constructing configurations with a fluent API.
///
/// Unlike [`MachineConfig::new`], `build()` runs the full
/// [`validate`](MachineConfig::validate) pass and reports every problem at once.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: Vec<String>,
    transitions: Vec<(String, String, String)>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, with or without transitions.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.push(name.into());
        self
    }

    /// Declare `from --event--> to`. Both endpoints become states.
    ///
    /// A later transition for the same `(from, event)` pair replaces the earlier one.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.transitions.push((from.into(), event.into(), to.into()));
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing or the result is invalid.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() && self.transitions.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut config = MachineConfig {
            initial,
            states: BTreeMap::new(),
        };
        for name in self.states {
            config = config.with_state(name);
        }
        for (from, event, to) in self.transitions {
            config = config.with_transition(from, event, to);
        }

        match config.validate() {
            Validation::Success(()) => Ok(config),
            Validation::Failure(errors) => {
                Err(BuildError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }
}
