//! Machine configuration: the set of states and their event-keyed transitions.
//!
//! A configuration is plain data. It is built once by the caller and then shared
//! read-only by every machine that uses it.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Transition table for a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDescriptor {
    /// Event name -> destination state name
    #[serde(default)]
    pub transitions: BTreeMap<String, String>,
}

impl StateDescriptor {
    /// Destination reached by `event` from this state, if any.
    pub fn destination(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }
}

/// Allowed states and the transitions between them.
///
/// # Example
///
/// ```rust
/// use statetrail::MachineConfig;
///
/// let config = MachineConfig::new("normal")
///     .with_transition("normal", "click", "busy")
///     .with_transition("busy", "done", "normal");
///
/// assert_eq!(config.destination("normal", "click"), Some("busy"));
/// assert_eq!(config.destination("busy", "click"), None);
/// assert!(config.validate().is_success());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Name of the starting state
    pub initial: String,
    /// State name -> descriptor
    pub states: BTreeMap<String, StateDescriptor>,
}

impl MachineConfig {
    /// Create a configuration with no states.
    ///
    /// The initial state is not added automatically; declare it with
    /// [`with_state`](Self::with_state) or a transition.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: BTreeMap::new(),
        }
    }

    /// Declare a state with no outgoing transitions (no-op if it already exists).
    pub fn with_state(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name.into()).or_default();
        self
    }

    /// Declare `from --event--> to`, adding both endpoints as states.
    pub fn with_transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let to = to.into();
        self.states.entry(to.clone()).or_default();
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to);
        self
    }

    /// Check whether `state` is a configured state.
    pub fn contains_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Look up the destination of `event` when in `state`.
    ///
    /// Returns `None` when the state is unknown or has no mapping for the event.
    pub fn destination(&self, state: &str, event: &str) -> Option<&str> {
        self.states.get(state)?.destination(event)
    }

    /// All configured state names.
    pub fn state_names(&self) -> BTreeSet<&str> {
        self.states.keys().map(String::as_str).collect()
    }

    /// Names of states whose transition table handles `event`.
    pub fn states_with_event(&self, event: &str) -> BTreeSet<&str> {
        self.states
            .iter()
            .filter(|(_, descriptor)| descriptor.transitions.contains_key(event))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Events accepted by `state`, sorted. Empty for unknown states.
    pub fn events_from(&self, state: &str) -> Vec<&str> {
        self.states
            .get(state)
            .map(|descriptor| descriptor.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Check the eager construction requirement: the initial state is configured.
    pub(crate) fn check_initial(&self) -> Result<(), ConfigError> {
        if self.contains_state(&self.initial) {
            Ok(())
        } else {
            Err(ConfigError::UnknownInitialState {
                initial: self.initial.clone(),
            })
        }
    }

    /// Validate the whole configuration, accumulating every problem.
    ///
    /// Machines only require the initial state to exist; dangling transition
    /// targets are rejected lazily when triggered. This check reports both.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        checks.push(match self.check_initial() {
            Ok(()) => Validation::success(()),
            Err(error) => Validation::fail(error),
        });

        for (from, descriptor) in &self.states {
            for (event, to) in &descriptor.transitions {
                if !self.contains_state(to) {
                    checks.push(Validation::fail(ConfigError::UnknownDestination {
                        from: from.clone(),
                        event: event.clone(),
                        to: to.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> MachineConfig {
        MachineConfig::new("normal")
            .with_transition("normal", "click", "busy")
            .with_transition("busy", "done", "normal")
            .with_transition("busy", "fail", "broken")
    }

    #[test]
    fn destination_follows_transition_table() {
        let config = button();
        assert_eq!(config.destination("normal", "click"), Some("busy"));
        assert_eq!(config.destination("busy", "done"), Some("normal"));
        assert_eq!(config.destination("normal", "done"), None);
        assert_eq!(config.destination("missing", "click"), None);
    }

    #[test]
    fn with_transition_declares_both_endpoints() {
        let config = button();
        assert!(config.contains_state("broken"));
        assert!(config.events_from("broken").is_empty());
    }

    #[test]
    fn with_state_does_not_clobber_transitions() {
        let config = button().with_state("normal");
        assert_eq!(config.destination("normal", "click"), Some("busy"));
    }

    #[test]
    fn states_with_event_filters_by_key() {
        let config = button();
        assert_eq!(config.states_with_event("click"), BTreeSet::from(["normal"]));
        assert_eq!(config.states_with_event("fail"), BTreeSet::from(["busy"]));
        assert!(config.states_with_event("nothing").is_empty());
        assert_eq!(
            config.state_names(),
            BTreeSet::from(["broken", "busy", "normal"])
        );
    }

    #[test]
    fn events_from_is_sorted() {
        assert_eq!(button().events_from("busy"), vec!["done", "fail"]);
    }

    #[test]
    fn validate_accepts_closed_config() {
        assert!(button().validate().is_success());
    }

    #[test]
    fn validate_accumulates_all_problems() {
        let mut config = MachineConfig::new("start").with_state("a");
        config
            .states
            .get_mut("a")
            .unwrap()
            .transitions
            .insert("go".to_string(), "nowhere".to_string());
        config
            .states
            .get_mut("a")
            .unwrap()
            .transitions
            .insert("jump".to_string(), "elsewhere".to_string());

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::UnknownInitialState { .. })));
                assert_eq!(
                    errors
                        .iter()
                        .filter(|e| matches!(e, ConfigError::UnknownDestination { .. }))
                        .count(),
                    2
                );
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn config_deserializes_from_json() {
        let json = r#"{
            "initial": "normal",
            "states": {
                "normal": { "transitions": { "click": "busy" } },
                "busy": { "transitions": { "done": "normal" } },
                "idle": {}
            }
        }"#;

        let config: MachineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.initial, "normal");
        assert_eq!(config.destination("normal", "click"), Some("busy"));
        assert!(config.events_from("idle").is_empty());
    }
}
