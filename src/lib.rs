//! Actor FSM: behavior-mode state machine for autonomous game actors
//!
//! Each actor owns one [`ActorStateMachine`] that tracks what it is doing
//! (idle, moving, aiming, firing, retreating, deactivated), publishes every
//! change as a `(previous, next)` pair, and answers the questions other
//! subsystems ask every tick: should timers run, may new input be handled,
//! should the weapon be drawn.
//!
//! # Core Concepts
//!
//! - **State**: closed set of behavior modes via the `State` trait and the
//!   concrete [`ActorState`] enum
//! - **Transition feed**: one channel per subscriber, primed with the latest
//!   change on subscribe
//! - **Derived queries**: pure predicates over the current mode, never cached
//! - **Checkpoints**: serializable snapshots that restore a machine exactly
//!
//! # Example
//!
//! ```rust
//! use actor_fsm::{ActorState, ActorStateMachine};
//!
//! let mut machine = ActorStateMachine::new(ActorState::Idle);
//! let mut feed = machine.subscribe();
//!
//! machine.transition(ActorState::MovingRight);
//! assert!(machine.timer_should_run());
//! assert!(!machine.show_weapon());
//! assert_eq!(machine.state_prior_to_motion(), ActorState::Idle);
//!
//! let change = feed.try_next().unwrap();
//! assert_eq!(change.pair(), (ActorState::Idle, ActorState::MovingRight));
//! ```

pub mod actor;
pub mod builder;
pub mod checkpoint;
pub mod core;

// Re-export commonly used types
pub use actor::{ActorState, ActorStateMachine, ParseStateError};
pub use builder::{ActorStateMachineBuilder, BuildError, MachineConfig};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{State, StateChange, Subscription, TransitionFeed, TransitionLog};
