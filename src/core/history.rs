//! Emitted state changes and the bounded transition log.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// One emitted `(previous, next)` pair.
///
/// `sequence` counts emissions of the owning machine, starting at 1.
///
/// # Example
///
/// ```rust
/// use actor_fsm::core::StateChange;
/// use actor_fsm::ActorState;
///
/// let change = StateChange::new(ActorState::Idle, ActorState::Firing, 1);
/// assert_eq!(change.pair(), (ActorState::Idle, ActorState::Firing));
/// assert!(!change.is_reentry());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateChange<S: State> {
    /// State active before the transition
    pub from: S,
    /// State active after the transition
    pub to: S,
    /// Position of this change in the machine's emission order
    pub sequence: u64,
    /// When the change was emitted
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateChange<S> {
    /// Create a change stamped with the current time.
    pub fn new(from: S, to: S, sequence: u64) -> Self {
        Self {
            from,
            to,
            sequence,
            timestamp: Utc::now(),
        }
    }

    /// The `(previous, next)` pair.
    pub fn pair(&self) -> (S, S) {
        (self.from.clone(), self.to.clone())
    }

    /// True when the transition re-asserted the state it started from.
    pub fn is_reentry(&self) -> bool {
        self.from == self.to
    }
}

/// Bounded log of the most recent state changes.
///
/// Oldest entries are evicted once `capacity` is reached. A capacity of
/// zero keeps nothing. The log is a diagnostic aid and is independent of
/// the transition feed, which only ever retains the latest change.
///
/// # Example
///
/// ```rust
/// use actor_fsm::core::{StateChange, TransitionLog};
/// use actor_fsm::ActorState;
///
/// let mut log = TransitionLog::with_capacity(2);
/// log.record(StateChange::new(ActorState::Idle, ActorState::AimingUp, 1));
/// log.record(StateChange::new(ActorState::AimingUp, ActorState::Firing, 2));
/// log.record(StateChange::new(ActorState::Firing, ActorState::Idle, 3));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(
///     log.path(),
///     vec![&ActorState::AimingUp, &ActorState::Firing, &ActorState::Idle]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    changes: VecDeque<StateChange<S>>,
    capacity: usize,
}

impl<S: State> TransitionLog<S> {
    /// Entries retained when no capacity is configured.
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Create an empty log with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty log that retains at most `capacity` changes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            changes: VecDeque::new(),
            capacity,
        }
    }

    /// Append a change, evicting the oldest one when full.
    pub fn record(&mut self, change: StateChange<S>) {
        if self.capacity == 0 {
            return;
        }
        if self.changes.len() == self.capacity {
            self.changes.pop_front();
        }
        self.changes.push_back(change);
    }

    /// States traversed by the retained changes.
    ///
    /// Returns the `from` state of the oldest retained change followed by
    /// the `to` state of every change, in order.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.front() {
            path.push(&first.from);
        }
        path.extend(self.changes.iter().map(|change| &change.to));
        path
    }

    /// Time between the oldest and newest retained change.
    ///
    /// Returns `None` if the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.front()?, self.changes.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained changes, oldest first.
    pub fn changes(&self) -> impl Iterator<Item = &StateChange<S>> {
        self.changes.iter()
    }

    /// Most recently recorded change.
    pub fn last(&self) -> Option<&StateChange<S>> {
        self.changes.back()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<S: State> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}
