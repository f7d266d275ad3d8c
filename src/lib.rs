//! Statetrail: a small finite-state machine with undo/redo history
//!
//! A machine is driven through string-labelled states by named events, as
//! described by a read-only [`MachineConfig`]. Every move is recorded in a
//! linear history whose cursor can be stepped backward and forward. Making a
//! new move after stepping back discards the abandoned future, like the undo
//! stack of a text editor.
//!
//! # Core Concepts
//!
//! - **Configuration**: states and their `event -> destination` transitions
//! - **History**: ordered states visited, with a cursor for undo/redo
//! - **Checkpoints**: serializable snapshots for resuming a machine later
//!
//! # Example
//!
//! ```rust
//! use statetrail::{MachineConfig, StateMachine, TransitionError};
//!
//! let config = MachineConfig::new("normal")
//!     .with_transition("normal", "click", "busy")
//!     .with_transition("busy", "done", "normal");
//!
//! let mut machine = StateMachine::new(config)?;
//! machine.trigger("click")?;
//! machine.trigger("done")?;
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "busy");
//!
//! // "click" is not handled while busy
//! assert!(matches!(
//!     machine.trigger("click"),
//!     Err(TransitionError::InvalidTransition { .. })
//! ));
//! assert_eq!(machine.state(), "busy");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{ConfigError, HistoryEntry, MachineConfig, StateDescriptor, StateHistory};
pub use machine::{StateMachine, TransitionError};
