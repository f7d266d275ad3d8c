//! Document Editor Workflow
//!
//! This example models a document review workflow with branching history and
//! checkpoints.
//!
//! Key concepts:
//! - Building a validated configuration with `ConfigBuilder`
//! - Branching: a new move after undo discards the old future
//! - Checkpointing to JSON and resuming
//!
//! Run with: cargo run --example document_editor

use statetrail::{Checkpoint, ConfigBuilder, StateMachine};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Document Editor Workflow ===\n");

    let config = Arc::new(
        ConfigBuilder::new()
            .initial("draft")
            .transition("draft", "submit", "review")
            .transition("review", "approve", "published")
            .transition("review", "reject", "draft")
            .transition("published", "archive", "archived")
            .build()?,
    );

    let mut machine = StateMachine::new(Arc::clone(&config))?;
    println!("States handling 'submit': {:?}", machine.states(Some("submit")));
    println!("All states: {:?}\n", machine.states(None));

    machine.trigger("submit")?;
    machine.trigger("approve")?;
    println!("Path so far: {:?}", machine.history().path());

    machine.undo();
    machine.trigger("reject")?;
    println!("After undo + reject: {:?}", machine.history().path());
    println!("Redo available: {}\n", machine.can_redo());

    let json = machine.checkpoint().to_json()?;
    println!("Checkpoint: {} bytes of JSON", json.len());

    let mut resumed = StateMachine::resume(Arc::clone(&config), Checkpoint::from_json(&json)?)?;
    println!("Resumed in state: {}", resumed.state());
    resumed.undo();
    println!("Resumed machine can still undo, now in: {}", resumed.state());

    println!("\n=== Example Complete ===");
    Ok(())
}
