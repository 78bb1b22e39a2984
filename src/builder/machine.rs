//! Builder for constructing actor state machines.

use crate::actor::{ActorState, ActorStateMachine};
use crate::builder::config::MachineConfig;
use crate::builder::error::BuildError;
use crate::core::TransitionLog;

/// Builder for constructing actor state machines with a fluent API.
#[derive(Clone, Debug)]
pub struct ActorStateMachineBuilder {
    initial: Option<ActorState>,
    label: String,
    history_limit: usize,
}

impl ActorStateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            label: ActorStateMachine::DEFAULT_LABEL.to_string(),
            history_limit: TransitionLog::<ActorState>::DEFAULT_CAPACITY,
        }
    }

    /// Create a builder pre-filled from a configuration.
    pub fn from_config(config: MachineConfig) -> Self {
        Self {
            initial: Some(config.initial_state),
            label: config.label,
            history_limit: config.history_limit,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: ActorState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the actor label used in logs and checkpoints.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set how many changes the transition log retains. Zero disables it.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<ActorStateMachine, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.label.trim().is_empty() {
            return Err(BuildError::EmptyLabel);
        }

        tracing::debug!(
            target: "actor_fsm::builder",
            actor = %self.label,
            initial = initial.label(),
            history_limit = self.history_limit,
            "built actor state machine"
        );

        Ok(ActorStateMachine::with_options(
            initial,
            self.label,
            self.history_limit,
        ))
    }
}

impl Default for ActorStateMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
