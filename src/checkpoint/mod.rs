//! Checkpoint and resume for state machines.
//!
//! A checkpoint captures a machine's full navigable history (including any
//! redo branch) so it can be resumed later against the same configuration.
//! The configuration itself is not stored. Nothing here touches the filesystem;
//! callers decide where the encoded bytes live.

use crate::core::{MachineConfig, StateHistory};
use crate::machine::StateMachine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of state machine history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the machine's configuration
    pub initial_state: String,

    /// Current state of the machine
    pub current_state: String,

    /// Complete history with cursor
    pub history: StateHistory,
}

impl Checkpoint {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Encode with bincode.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from bincode.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    fn validate_against(&self, config: &MachineConfig) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if self.initial_state != config.initial {
            return Err(CheckpointError::ConfigMismatch(format!(
                "checkpoint initial state '{}' does not match configured '{}'",
                self.initial_state, config.initial
            )));
        }

        if self.history.entries()[0].state != config.initial {
            return Err(CheckpointError::ConfigMismatch(format!(
                "history starts at '{}' instead of '{}'",
                self.history.entries()[0].state,
                config.initial
            )));
        }

        if let Some(entry) = self
            .history
            .entries()
            .iter()
            .find(|entry| !config.contains_state(&entry.state))
        {
            return Err(CheckpointError::ConfigMismatch(format!(
                "history contains unknown state '{}'",
                entry.state
            )));
        }

        if self.current_state != self.history.current() {
            return Err(CheckpointError::ConfigMismatch(format!(
                "current state '{}' disagrees with history cursor at '{}'",
                self.current_state,
                self.history.current()
            )));
        }

        Ok(())
    }
}

impl StateMachine {
    /// Capture the machine's history and cursor.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: self.config().initial.clone(),
            current_state: self.state().to_string(),
            history: self.history().clone(),
        }
    }

    /// Rebuild a machine from a checkpoint taken against `config`.
    pub fn resume(
        config: impl Into<Arc<MachineConfig>>,
        checkpoint: Checkpoint,
    ) -> Result<Self, CheckpointError> {
        let config = config.into();
        checkpoint.validate_against(&config)?;

        tracing::debug!(
            id = %checkpoint.id,
            state = %checkpoint.current_state,
            entries = checkpoint.history.len(),
            "resumed from checkpoint"
        );
        Ok(StateMachine::from_history(config, checkpoint.history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> MachineConfig {
        MachineConfig::new("normal")
            .with_transition("normal", "click", "busy")
            .with_transition("busy", "done", "normal")
    }

    fn walked_machine() -> StateMachine {
        let mut machine = StateMachine::new(button()).unwrap();
        machine.trigger("click").unwrap();
        machine.trigger("done").unwrap();
        machine.undo();
        machine
    }

    #[test]
    fn checkpoint_captures_cursor_and_redo_branch() {
        let checkpoint = walked_machine().checkpoint();

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.initial_state, "normal");
        assert_eq!(checkpoint.current_state, "busy");
        assert_eq!(checkpoint.history.len(), 3);
        assert_eq!(checkpoint.history.position(), 1);
        assert!(uuid::Uuid::parse_str(&checkpoint.id).is_ok());
    }

    #[test]
    fn checkpoint_ids_are_unique() {
        let machine = walked_machine();
        assert_ne!(machine.checkpoint().id, machine.checkpoint().id);
    }

    #[test]
    fn resume_restores_undo_and_redo() {
        let checkpoint = walked_machine().checkpoint();
        let mut machine = StateMachine::resume(button(), checkpoint).unwrap();

        assert_eq!(machine.state(), "busy");
        assert!(machine.redo());
        assert_eq!(machine.state(), "normal");
        assert!(machine.undo());
        assert!(machine.undo());
        assert!(!machine.undo());
    }

    #[test]
    fn json_round_trip_resumes() {
        let json = walked_machine().checkpoint().to_json().unwrap();
        let checkpoint = Checkpoint::from_json(&json).unwrap();

        let machine = StateMachine::resume(button(), checkpoint).unwrap();
        assert_eq!(machine.history().path(), vec!["normal", "busy", "normal"]);
    }

    #[test]
    fn binary_round_trip_preserves_checkpoint() {
        let checkpoint = walked_machine().checkpoint();
        let bytes = checkpoint.to_binary().unwrap();
        let restored = Checkpoint::from_binary(&bytes).unwrap();

        assert_eq!(checkpoint, restored);
    }

    #[test]
    fn from_json_reports_garbage() {
        let result = Checkpoint::from_json("not a checkpoint");
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn resume_rejects_future_version() {
        let mut checkpoint = walked_machine().checkpoint();
        checkpoint.version = CHECKPOINT_VERSION + 1;

        let result = StateMachine::resume(button(), checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn resume_rejects_other_configuration() {
        let checkpoint = walked_machine().checkpoint();
        let other = MachineConfig::new("normal").with_transition("normal", "go", "away");

        let result = StateMachine::resume(other, checkpoint);
        assert!(matches!(result, Err(CheckpointError::ConfigMismatch(_))));
    }

    #[test]
    fn resume_rejects_mismatched_initial_state() {
        let checkpoint = walked_machine().checkpoint();
        let mut config = button();
        config.initial = "busy".to_string();

        let result = StateMachine::resume(config, checkpoint);
        assert!(matches!(result, Err(CheckpointError::ConfigMismatch(_))));
    }

    #[test]
    fn resume_rejects_inconsistent_current_state() {
        let mut checkpoint = walked_machine().checkpoint();
        checkpoint.current_state = "normal".to_string();

        let result = StateMachine::resume(button(), checkpoint);
        assert!(matches!(result, Err(CheckpointError::ConfigMismatch(_))));
    }
}
