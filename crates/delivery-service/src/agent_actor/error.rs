//! Error types for the Delivery Agent actor.

use thiserror::Error;

/// Errors that can occur during agent directory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AgentError {
    /// Name or rating failed validation.
    #[error("Invalid agent: {0}")]
    Validation(String),

    /// The requested agent was not found.
    #[error("Agent not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for AgentError {
    fn from(msg: String) -> Self {
        AgentError::ActorCommunicationError(msg)
    }
}
