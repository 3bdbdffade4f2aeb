//! Traffic Light State Machine
//!
//! This example drives a cyclic machine by events, then walks the
//! undo/redo history back and forth.
//!
//! Key concepts:
//! - Cyclic event transitions (states repeat)
//! - Direct jumps alongside event-driven moves
//! - Undo/redo history and the reset carve-out
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use stepwise::{machine_config, StateMachine};
use tracing_subscriber::EnvFilter;

fn main() -> stepwise::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let config = machine_config! {
        initial: "green",
        states: {
            "green" => { "next" => "yellow" },
            "yellow" => { "next" => "red" },
            "red" => { "next" => "green" },
        }
    }?;
    let mut light = StateMachine::new(config)?;

    println!("Initial state: {}", light.current_state());
    println!("States: {:?}\n", light.list_states(None));

    println!("Cycling:");
    for _ in 0..2 {
        light.fire("next")?;
        println!("  next -> {}", light.current_state());
    }

    println!("\nWalking history:");
    while light.undo() {
        println!("  undo -> {}", light.current_state());
    }
    while light.redo() {
        println!("  redo -> {}", light.current_state());
    }

    println!("\nJump and reset:");
    light.set_state("green")?;
    println!("  set_state -> {}", light.current_state());
    light.reset();
    println!(
        "  reset -> {} (undo entries kept: {})",
        light.current_state(),
        light.history().undo_stack().len()
    );

    if let Err(error) = light.fire("stop") {
        println!("\nRejected: {error}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
