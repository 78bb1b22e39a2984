//! Build errors for the actor state machine builder.

use thiserror::Error;

/// Errors that can occur when building an actor state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Actor label must not be empty")]
    EmptyLabel,

    #[error("Invalid machine configuration: {0}")]
    InvalidConfig(String),
}
