//! Actor behavior modes and the state machine that tracks them.
//!
//! - `ActorState`: closed set of behavior modes plus derived predicates
//! - `ActorStateMachine`: current mode, prior-to-motion snapshot,
//!   transition feed and log

mod machine;
mod state;

pub use machine::ActorStateMachine;
pub use state::{ActorState, ParseStateError};
