//! Toggle Button
//!
//! This example drives a button through clicks and walks its history back and
//! forward.
//!
//! Key concepts:
//! - Event-keyed transitions
//! - Undo/redo over recorded states
//! - `reset` versus `clear_history`
//!
//! Run with: RUST_LOG=debug cargo run --example toggle_button

use statetrail::{machine_config, StateMachine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Toggle Button State Machine ===\n");

    let config = machine_config! {
        initial: "normal",
        states: {
            "normal" => { "click" => "busy" },
            "busy" => { "done" => "normal" },
        }
    };
    let mut machine = StateMachine::new(config)?;

    println!("Initial state: {}", machine.state());
    machine.trigger("click")?;
    println!("After click:   {}", machine.state());
    machine.trigger("done")?;
    println!("After done:    {}\n", machine.state());

    while machine.undo() {
        println!("Undo ->        {}", machine.state());
    }
    println!("Undo again returns false, still {}\n", machine.state());

    if let Err(error) = machine.trigger("done") {
        println!("Rejected: {error}\n");
    }

    machine.redo();
    machine.redo();
    machine.reset();
    println!("After reset:   {} (redo available: {})", machine.state(), machine.can_redo());

    machine.clear_history();
    println!(
        "After clear:   {} (redo available: {})",
        machine.state(),
        machine.can_redo()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
