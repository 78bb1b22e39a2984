//! Core state machine types.
//!
//! This module contains the state-agnostic building blocks:
//! - State definitions via the `State` trait
//! - Emitted changes and the bounded transition log
//! - The transition feed and its subscriptions
//!
//! Nothing here knows about actors; the `actor` module plugs its
//! concrete state enum into these types.

mod feed;
mod history;
mod state;

pub use feed::{Subscription, TransitionFeed};
pub use history::{StateChange, TransitionLog};
pub use state::State;
