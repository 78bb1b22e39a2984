//! Actor Update Loop
//!
//! This example drives one actor through a short gameplay script.
//!
//! Key concepts:
//! - Gameplay events request mode changes through `transition`
//! - An animation selector reacts to the feed instead of polling
//! - Per-tick gating uses the derived queries
//! - A checkpoint round-trip restores the actor mid-script
//!
//! Run with: RUST_LOG=actor_fsm=trace cargo run --example actor_loop

use actor_fsm::{
    ActorState, ActorStateMachine, ActorStateMachineBuilder, Checkpoint, MachineConfig,
    StateChange,
};
use tracing_subscriber::EnvFilter;

fn animation_for(change: &StateChange<ActorState>) -> &'static str {
    match change.to {
        ActorState::Idle => "idle_loop",
        ActorState::InMotion | ActorState::MovingLeft | ActorState::MovingRight => "walk_cycle",
        ActorState::Firing => "fire_once",
        ActorState::AimingUp => "aim_high",
        ActorState::AimingDown => "aim_low",
        ActorState::Getaway => "sprint",
        ActorState::InactiveWaiting => "collapse",
        ActorState::Inactive => "none",
    }
}

fn tick(machine: &ActorStateMachine, frame: u32) {
    println!(
        "  frame {frame:>2}: {:<16} timers={:<5} input={:<5} weapon={}",
        machine.state_name(),
        machine.timer_should_run(),
        machine.should_handle_new_input(),
        machine.show_weapon()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Actor Update Loop Example ===\n");

    let config = MachineConfig::from_json(r#"{ "label": "grunt-7", "history_limit": 16 }"#)?;
    let mut machine = ActorStateMachineBuilder::from_config(config).build()?;
    let mut animations = machine.subscribe();

    let script = [
        ActorState::AimingUp,
        ActorState::Firing,
        ActorState::Idle,
        ActorState::MovingLeft,
        ActorState::MovingLeft,
    ];

    println!("Script, first half:");
    for (frame, next) in (1..).zip(script) {
        machine.transition(next);
        tick(&machine, frame);
    }

    for change in animations.drain() {
        println!(
            "  anim #{}: {} -> {} plays '{}'",
            change.sequence,
            change.from,
            change.to,
            animation_for(&change)
        );
    }
    println!(
        "  returning to '{}' once movement stops\n",
        machine.state_prior_to_motion()
    );

    println!("Checkpoint round-trip:");
    let bytes = machine.checkpoint().to_bytes()?;
    println!("  checkpoint is {} bytes", bytes.len());
    let mut machine = ActorStateMachine::restore(Checkpoint::from_bytes(&bytes)?)?;
    let mut animations = machine.subscribe();
    println!(
        "  restored '{}' in {} after {} transitions\n",
        machine.label(),
        machine.state_name(),
        machine.transition_count()
    );

    println!("Script, second half:");
    let back = machine.state_prior_to_motion();
    machine.clear_prior_motion_state();
    let finale = [
        back,
        ActorState::Getaway,
        ActorState::InactiveWaiting,
        ActorState::Inactive,
    ];
    for (frame, next) in (6..).zip(finale) {
        machine.transition(next);
        tick(&machine, frame);
    }

    // First entry is the replayed change from before the checkpoint.
    for change in animations.drain() {
        println!(
            "  anim #{}: {} -> {} plays '{}'",
            change.sequence,
            change.from,
            change.to,
            animation_for(&change)
        );
    }

    println!("\nVisited: {:?}", machine.history().path());
    println!("Active: {}", machine.is_active());

    println!("\n=== Example Complete ===");
    Ok(())
}
