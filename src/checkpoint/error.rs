//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint data is inconsistent; carries every violation found
    #[error("Checkpoint validation failed with {} violation(s)", .violations.len())]
    ValidationFailed { violations: Vec<CheckpointViolation> },
}

/// A single inconsistency found while validating a checkpoint.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckpointViolation {
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Actor label must not be empty")]
    EmptyLabel,

    #[error("Emission count is at its maximum; no further transition can be numbered")]
    SequenceExhausted,

    #[error("Latest change ends at '{latest}' but current state is '{current}'")]
    LatestChangeMismatch { latest: String, current: String },

    #[error("Latest change has sequence {sequence} but {emitted} change(s) were emitted")]
    SequenceMismatch { sequence: u64, emitted: u64 },

    #[error("{emitted} change(s) were emitted but no latest change was recorded")]
    MissingLatestChange { emitted: u64 },

    #[error("History ends at '{last}' but current state is '{current}'")]
    HistoryMismatch { last: String, current: String },

    #[error("History ends at sequence {sequence} but {emitted} change(s) were emitted")]
    StaleHistory { sequence: u64, emitted: u64 },

    #[error("History holds {len} change(s) but its capacity is {capacity}")]
    HistoryOverflow { len: usize, capacity: usize },
}
