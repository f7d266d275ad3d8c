//! State machine with event-keyed transitions and undo/redo history.

use crate::core::{ConfigError, MachineConfig, StateHistory};
use crate::machine::error::TransitionError;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Finite-state machine over string-labelled states.
///
/// The machine shares its configuration read-only and exclusively owns its
/// history. Every successful move is recorded, and the cursor can be walked
/// back and forward with [`undo`](Self::undo) and [`redo`](Self::redo).
///
/// # Example
///
/// ```rust
/// use statetrail::{MachineConfig, StateMachine};
///
/// let config = MachineConfig::new("normal")
///     .with_transition("normal", "click", "busy")
///     .with_transition("busy", "done", "normal");
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger("click").unwrap();
/// assert_eq!(machine.state(), "busy");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "normal");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "busy");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Arc<MachineConfig>,
    history: StateHistory,
}

impl StateMachine {
    /// Create a machine positioned at the configured initial state.
    ///
    /// Fails if the initial state is not one of the configured states. Other
    /// configuration problems surface when the offending transition is used;
    /// call [`MachineConfig::validate`] to find them up front.
    pub fn new(config: impl Into<Arc<MachineConfig>>) -> Result<Self, ConfigError> {
        let config = config.into();
        config.check_initial()?;
        let history = StateHistory::new(config.initial.clone());
        Ok(Self { config, history })
    }

    /// Assemble a machine from an already checked history.
    pub(crate) fn from_history(config: Arc<MachineConfig>, history: StateHistory) -> Self {
        Self { config, history }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &str {
        self.history.current()
    }

    /// Get the shared configuration
    pub fn config(&self) -> &Arc<MachineConfig> {
        &self.config
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Move directly to `target`, bypassing the transition table.
    ///
    /// Any redo branch is discarded before the move is recorded.
    pub fn change_state(&mut self, target: &str) -> Result<(), TransitionError> {
        self.enter(target, None)
    }

    /// Follow the transition configured for `event` from the current state.
    ///
    /// The move is recorded exactly like [`change_state`](Self::change_state),
    /// tagged with the event.
    pub fn trigger(&mut self, event: &str) -> Result<(), TransitionError> {
        let Some(destination) = self.config.destination(self.state(), event) else {
            let error = TransitionError::InvalidTransition {
                from: self.state().to_string(),
                event: event.to_string(),
            };
            tracing::debug!(%error, "transition rejected");
            return Err(error);
        };

        // Owned copy so `enter` can borrow self mutably.
        let destination = destination.to_string();
        self.enter(&destination, Some(event.to_string()))
    }

    fn enter(&mut self, target: &str, event: Option<String>) -> Result<(), TransitionError> {
        if !self.config.contains_state(target) {
            let error = TransitionError::UnknownState {
                state: target.to_string(),
            };
            tracing::debug!(%error, "transition rejected");
            return Err(error);
        }

        let discarded = self.history.redo_len();
        tracing::debug!(
            from = self.state(),
            to = target,
            event = event.as_deref(),
            discarded,
            "state changed"
        );
        self.history.record(target, event);
        Ok(())
    }

    /// Return to the initial state, keeping the recorded history.
    ///
    /// Unlike [`clear_history`](Self::clear_history), states recorded after
    /// the initial one remain reachable through [`redo`](Self::redo).
    pub fn reset(&mut self) {
        self.history.rewind();
        tracing::debug!(state = self.state(), "machine reset");
    }

    /// Configured state names.
    ///
    /// With `Some(event)`, only states whose transition table handles the event.
    pub fn states(&self, event: Option<&str>) -> BTreeSet<&str> {
        match event {
            Some(event) => self.config.states_with_event(event),
            None => self.config.state_names(),
        }
    }

    /// Events that can be triggered from the current state, sorted.
    pub fn events(&self) -> Vec<&str> {
        self.config.events_from(self.state())
    }

    /// Whether `event` has a transition from the current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.config.destination(self.state(), event).is_some()
    }

    /// Whether [`undo`](Self::undo) would move.
    pub fn can_undo(&self) -> bool {
        self.history.can_back()
    }

    /// Whether [`redo`](Self::redo) would move.
    pub fn can_redo(&self) -> bool {
        self.history.can_forward()
    }

    /// Step back to the previous recorded state.
    ///
    /// Returns `false` and changes nothing when already at the oldest entry.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.back();
        if moved {
            tracing::debug!(
                state = self.state(),
                position = self.history.position(),
                "undo"
            );
        }
        moved
    }

    /// Step forward to the next recorded state.
    ///
    /// Returns `false` and changes nothing when no forward history exists.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.forward();
        if moved {
            tracing::debug!(
                state = self.state(),
                position = self.history.position(),
                "redo"
            );
        }
        moved
    }

    /// Erase all recorded history and return to the initial state.
    pub fn clear_history(&mut self) {
        let dropped = self.history.len() - 1;
        self.history.clear(self.config.initial.clone());
        tracing::debug!(dropped, "history cleared");
    }
}
