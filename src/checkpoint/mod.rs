//! Checkpoint and restore for actor state machines.
//!
//! A checkpoint captures everything needed to rebuild a machine: the
//! current mode, the prior-to-motion snapshot, the feed's latest change
//! and emission count, and the transition log. Subscriptions are not
//! captured; observers re-subscribe to the restored machine.

use crate::core::{State, StateChange, TransitionLog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{CheckpointError, CheckpointViolation};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a state machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Label of the actor the machine belongs to
    pub label: String,

    /// Mode active when the checkpoint was taken
    pub current_state: S,

    /// Prior-to-motion snapshot, `None` if never set
    pub prior_to_motion: Option<S>,

    /// Latest change published on the feed
    pub latest_change: Option<StateChange<S>>,

    /// Number of changes published on the feed
    pub emitted: u64,

    /// Retained transition log
    pub history: TransitionLog<S>,
}

impl<S: State> Checkpoint<S> {
    /// Serialize to human-readable JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON. Does not validate.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from binary. Does not validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check internal consistency, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<CheckpointViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<CheckpointViolation>>> = Vec::new();

        checks.push(if self.version == CHECKPOINT_VERSION {
            Validation::success(())
        } else {
            Validation::fail(CheckpointViolation::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        });

        if self.label.trim().is_empty() {
            checks.push(Validation::fail(CheckpointViolation::EmptyLabel));
        }

        if self.emitted == u64::MAX {
            checks.push(Validation::fail(CheckpointViolation::SequenceExhausted));
        }

        match &self.latest_change {
            Some(latest) => {
                if latest.to != self.current_state {
                    checks.push(Validation::fail(CheckpointViolation::LatestChangeMismatch {
                        latest: latest.to.name().to_string(),
                        current: self.current_state.name().to_string(),
                    }));
                }
                if latest.sequence != self.emitted {
                    checks.push(Validation::fail(CheckpointViolation::SequenceMismatch {
                        sequence: latest.sequence,
                        emitted: self.emitted,
                    }));
                }
            }
            None if self.emitted > 0 => {
                checks.push(Validation::fail(CheckpointViolation::MissingLatestChange {
                    emitted: self.emitted,
                }));
            }
            None => {}
        }

        if let Some(last) = self.history.last() {
            if last.to != self.current_state {
                checks.push(Validation::fail(CheckpointViolation::HistoryMismatch {
                    last: last.to.name().to_string(),
                    current: self.current_state.name().to_string(),
                }));
            }
            if last.sequence != self.emitted {
                checks.push(Validation::fail(CheckpointViolation::StaleHistory {
                    sequence: last.sequence,
                    emitted: self.emitted,
                }));
            }
        }

        if self.history.len() > self.history.capacity() {
            checks.push(Validation::fail(CheckpointViolation::HistoryOverflow {
                len: self.history.len(),
                capacity: self.history.capacity(),
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`Checkpoint::validate`] folded into a `Result`.
    pub fn check(&self) -> Result<(), CheckpointError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(CheckpointError::ValidationFailed {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}
