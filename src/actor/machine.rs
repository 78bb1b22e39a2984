//! Per-actor behavior-mode state machine.

use crate::actor::state::ActorState;
use crate::checkpoint::{Checkpoint, CheckpointError, CHECKPOINT_VERSION};
use crate::core::{State, StateChange, Subscription, TransitionFeed, TransitionLog};
use chrono::Utc;

/// Holds an actor's current behavior mode and publishes every change.
///
/// Any mode may follow any mode; there is no transition table. The only
/// conditional bookkeeping is the prior-to-motion snapshot taken when
/// the actor enters a motion mode.
///
/// # Example
///
/// ```rust
/// use actor_fsm::{ActorState, ActorStateMachine};
///
/// let mut machine = ActorStateMachine::new(ActorState::Idle);
/// let mut animations = machine.subscribe();
///
/// machine.transition(ActorState::Firing);
/// machine.transition(ActorState::InMotion);
///
/// assert_eq!(machine.state_prior_to_motion(), ActorState::Firing);
/// let pairs: Vec<_> = animations.drain().iter().map(|c| c.pair()).collect();
/// assert_eq!(
///     pairs,
///     vec![
///         (ActorState::Idle, ActorState::Firing),
///         (ActorState::Firing, ActorState::InMotion),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct ActorStateMachine {
    label: String,
    current: ActorState,
    prior_to_motion: Option<ActorState>,
    feed: TransitionFeed<ActorState>,
    history: TransitionLog<ActorState>,
}

impl ActorStateMachine {
    /// Label used when none is configured.
    pub const DEFAULT_LABEL: &'static str = "actor";

    /// Create a machine in `initial` with default label and log capacity.
    pub fn new(initial: ActorState) -> Self {
        Self::with_options(
            initial,
            Self::DEFAULT_LABEL.to_string(),
            TransitionLog::<ActorState>::DEFAULT_CAPACITY,
        )
    }

    pub(crate) fn with_options(initial: ActorState, label: String, history_limit: usize) -> Self {
        Self {
            label,
            current: initial,
            prior_to_motion: None,
            feed: TransitionFeed::new(),
            history: TransitionLog::with_capacity(history_limit),
        }
    }

    /// Move to `next`, publishing `(previous, next)`.
    ///
    /// Re-entering the current mode is not suppressed: it still publishes
    /// a pair and still refreshes the prior-to-motion snapshot.
    pub fn transition(&mut self, next: ActorState) -> &StateChange<ActorState> {
        let previous = self.current;
        if next.is_motion() {
            self.prior_to_motion = Some(previous);
        }
        self.current = next;

        let change = self.feed.publish(previous, next);
        self.history.record(change.clone());

        tracing::trace!(
            target: "actor_fsm::machine",
            actor = %self.label,
            from = previous.name(),
            to = next.name(),
            seq = change.sequence,
            "state transition"
        );
        if next.is_terminal() && !previous.is_terminal() {
            tracing::debug!(
                target: "actor_fsm::machine",
                actor = %self.label,
                state = next.name(),
                "actor deactivating"
            );
        } else if previous.is_terminal() && !next.is_terminal() {
            tracing::debug!(
                target: "actor_fsm::machine",
                actor = %self.label,
                state = next.name(),
                "actor reactivated"
            );
        }

        change
    }

    /// Reset the prior-to-motion snapshot to `Idle`.
    pub fn clear_prior_motion_state(&mut self) {
        self.prior_to_motion = Some(ActorState::Idle);
        tracing::debug!(
            target: "actor_fsm::machine",
            actor = %self.label,
            "prior motion state cleared"
        );
    }

    /// Open a subscription to the transition feed.
    ///
    /// The subscription is primed with the latest change, if the machine
    /// has transitioned at least once.
    pub fn subscribe(&mut self) -> Subscription<ActorState> {
        self.feed.subscribe()
    }

    pub fn current_state(&self) -> ActorState {
        self.current
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Latest published change; `None` before the first transition.
    pub fn latest_change(&self) -> Option<&StateChange<ActorState>> {
        self.feed.latest()
    }

    /// Number of transitions performed over the machine's lifetime.
    pub fn transition_count(&self) -> u64 {
        self.feed.emitted()
    }

    pub fn subscriber_count(&self) -> usize {
        self.feed.subscriber_count()
    }

    pub fn history(&self) -> &TransitionLog<ActorState> {
        &self.history
    }

    pub fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }

    pub fn timer_should_run(&self) -> bool {
        self.current.timer_should_run()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_active()
    }

    pub fn should_update(&self) -> bool {
        self.current.should_update()
    }

    pub fn should_handle_new_input(&self) -> bool {
        self.current.should_handle_new_input()
    }

    pub fn is_firing(&self) -> bool {
        self.current.is_firing()
    }

    pub fn can_fire(&self) -> bool {
        self.current.can_fire()
    }

    pub fn show_weapon(&self) -> bool {
        self.current.show_weapon()
    }

    pub fn can_move(&self) -> bool {
        self.current.can_move()
    }

    pub fn is_playing(&self) -> bool {
        self.current.is_playing()
    }

    /// Mode active before the most recent entry into a motion mode.
    ///
    /// Reads as `Idle` until a snapshot has been taken.
    pub fn state_prior_to_motion(&self) -> ActorState {
        self.prior_to_motion.unwrap_or(ActorState::Idle)
    }

    /// Label of the current mode.
    pub fn state_name(&self) -> &'static str {
        self.current.label()
    }

    /// Capture a checkpoint of the machine.
    pub fn checkpoint(&self) -> Checkpoint<ActorState> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            label: self.label.clone(),
            current_state: self.current,
            prior_to_motion: self.prior_to_motion,
            latest_change: self.feed.latest().cloned(),
            emitted: self.feed.emitted(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a machine from a checkpoint after validating it.
    ///
    /// The restored feed replays the checkpointed latest change to new
    /// subscribers and continues its sequence numbering.
    pub fn restore(checkpoint: Checkpoint<ActorState>) -> Result<Self, CheckpointError> {
        if let Err(err) = checkpoint.check() {
            tracing::warn!(
                target: "actor_fsm::checkpoint",
                actor = %checkpoint.label,
                id = %checkpoint.id,
                error = %err,
                "rejected checkpoint"
            );
            return Err(err);
        }

        tracing::debug!(
            target: "actor_fsm::checkpoint",
            actor = %checkpoint.label,
            id = %checkpoint.id,
            state = checkpoint.current_state.name(),
            "restored from checkpoint"
        );

        Ok(Self {
            label: checkpoint.label,
            current: checkpoint.current_state,
            prior_to_motion: checkpoint.prior_to_motion,
            feed: TransitionFeed::resume(checkpoint.latest_change, checkpoint.emitted),
            history: checkpoint.history,
        })
    }
}
