//! Serializable machine configuration.

use crate::actor::{ActorState, ActorStateMachine};
use crate::builder::error::BuildError;
use crate::core::TransitionLog;
use serde::{Deserialize, Serialize};

/// Settings applied by [`ActorStateMachineBuilder::from_config`].
///
/// Every field is optional in serialized form and falls back to its
/// default.
///
/// [`ActorStateMachineBuilder::from_config`]: crate::builder::ActorStateMachineBuilder::from_config
///
/// # Example
///
/// ```rust
/// use actor_fsm::builder::MachineConfig;
/// use actor_fsm::ActorState;
///
/// let config = MachineConfig::from_json(r#"{ "initial_state": "Getaway" }"#).unwrap();
/// assert_eq!(config.initial_state, ActorState::Getaway);
/// assert_eq!(config.label, "actor");
/// assert_eq!(config.history_limit, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// Mode the machine starts in
    pub initial_state: ActorState,

    /// Actor name used in log fields and checkpoints
    pub label: String,

    /// Maximum number of changes kept in the transition log
    pub history_limit: usize,
}

impl MachineConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            initial_state: ActorState::Idle,
            label: ActorStateMachine::DEFAULT_LABEL.to_string(),
            history_limit: TransitionLog::<ActorState>::DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = MachineConfig::from_json("{}").unwrap();
        assert_eq!(config, MachineConfig::default());
    }

    #[test]
    fn default_label_matches_machine_default() {
        let config = MachineConfig::default();
        assert_eq!(config.label, ActorStateMachine::DEFAULT_LABEL);
    }

    #[test]
    fn all_fields_are_read() {
        let config = MachineConfig::from_json(
            r#"{ "initial_state": "Inactive", "label": "sentry-3", "history_limit": 0 }"#,
        )
        .unwrap();

        assert_eq!(config.initial_state, ActorState::Inactive);
        assert_eq!(config.label, "sentry-3");
        assert_eq!(config.history_limit, 0);
    }

    #[test]
    fn unknown_state_is_rejected() {
        let result = MachineConfig::from_json(r#"{ "initial_state": "Dancing" }"#);
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = MachineConfig::from_json(r#"{ "speed": 3 }"#);
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }
}
