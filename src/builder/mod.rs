//! Builder API for configuring actor state machines.
//!
//! Machines can be assembled fluently or from a serialized
//! [`MachineConfig`].
//!
//! # Example
//!
//! ```
//! use actor_fsm::builder::ActorStateMachineBuilder;
//! use actor_fsm::ActorState;
//!
//! let machine = ActorStateMachineBuilder::new()
//!     .initial(ActorState::Idle)
//!     .label("grunt-1")
//!     .history_limit(16)
//!     .build()
//!     .unwrap();
//!
//! assert!(machine.can_fire());
//! ```

pub mod config;
pub mod error;
pub mod machine;

pub use config::MachineConfig;
pub use error::BuildError;
pub use machine::ActorStateMachineBuilder;
