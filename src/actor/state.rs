//! Behavior modes of an autonomous actor and the predicates derived from them.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Mutually exclusive behavior modes of an actor.
///
/// No ordering between modes is implied. Every predicate below is an
/// exhaustive match over this closed set, so adding a mode forces each
/// one to be revisited.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum ActorState {
    #[default]
    Idle,
    InMotion,
    Firing,
    MovingLeft,
    MovingRight,
    AimingUp,
    AimingDown,
    /// Retreating from a threat
    Getaway,
    /// Deactivation pending; still playing its last animation
    InactiveWaiting,
    Inactive,
}

impl ActorState {
    /// Every mode, in declaration order.
    pub const ALL: [ActorState; 10] = [
        Self::Idle,
        Self::InMotion,
        Self::Firing,
        Self::MovingLeft,
        Self::MovingRight,
        Self::AimingUp,
        Self::AimingDown,
        Self::Getaway,
        Self::InactiveWaiting,
        Self::Inactive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::InMotion => "InMotion",
            Self::Firing => "Firing",
            Self::MovingLeft => "MovingLeft",
            Self::MovingRight => "MovingRight",
            Self::AimingUp => "AimingUp",
            Self::AimingDown => "AimingDown",
            Self::Getaway => "Getaway",
            Self::InactiveWaiting => "InactiveWaiting",
            Self::Inactive => "Inactive",
        }
    }

    /// Modes whose entry snapshots the previous mode as prior-to-motion.
    pub fn is_motion(self) -> bool {
        matches!(self, Self::InMotion | Self::MovingLeft | Self::MovingRight)
    }

    /// Whether per-tick actor timers should advance.
    pub fn timer_should_run(self) -> bool {
        matches!(
            self,
            Self::Idle
                | Self::InMotion
                | Self::MovingLeft
                | Self::MovingRight
                | Self::AimingUp
                | Self::AimingDown
                | Self::Getaway
        )
    }

    pub fn is_active(self) -> bool {
        !matches!(self, Self::Inactive)
    }

    /// Alias of [`ActorState::is_active`] used by update loops.
    pub fn should_update(self) -> bool {
        self.is_active()
    }

    pub fn should_handle_new_input(self) -> bool {
        !matches!(self, Self::Firing | Self::InactiveWaiting)
    }

    pub fn is_firing(self) -> bool {
        matches!(self, Self::Firing)
    }

    pub fn can_fire(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the held weapon should be rendered.
    pub fn show_weapon(self) -> bool {
        matches!(
            self,
            Self::Firing | Self::Idle | Self::AimingDown | Self::AimingUp
        )
    }

    pub fn can_move(self) -> bool {
        matches!(self, Self::Idle | Self::Getaway)
    }

    /// Whether the actor's looping animation should be playing.
    pub fn is_playing(self) -> bool {
        matches!(
            self,
            Self::Idle | Self::InMotion | Self::Getaway | Self::InactiveWaiting
        )
    }
}

impl State for ActorState {
    fn name(&self) -> &str {
        self.label()
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Inactive | Self::InactiveWaiting)
    }
}

impl fmt::Display for ActorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label does not name any [`ActorState`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown actor state '{label}'")]
pub struct ParseStateError {
    pub label: String,
}

impl FromStr for ActorState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.label() == s)
            .ok_or_else(|| ParseStateError {
                label: s.to_string(),
            })
    }
}
