//! Core State trait for behavior-mode states.
//!
//! Any closed enumeration of actor modes can implement this trait to be
//! carried through the transition feed, the transition log and checkpoints.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for behavior-mode states.
///
/// All methods are pure. A state is a plain value describing what an actor
/// is doing right now; it carries no behavior of its own.
///
/// # Required Traits
///
/// - `Clone`: states are copied into every emitted change
/// - `PartialEq`: checkpoints compare states for consistency
/// - `Debug`: states show up in log fields
/// - `Serialize` + `Deserialize`: states are persisted in checkpoints
/// - `Send` + `Sync`: changes travel through subscriber channels
///
/// # Example
///
/// ```rust
/// use actor_fsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Broken,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_terminal(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// assert!(DoorState::Broken.is_terminal());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Human-readable label, used in logs and for display.
    fn name(&self) -> &str;

    /// Check if this is a terminal-like state.
    ///
    /// Terminal-like states switch most behavior off, but a machine still
    /// accepts transitions out of them (e.g. reactivation).
    ///
    /// Default implementation returns `false`.
    fn is_terminal(&self) -> bool {
        false
    }
}
