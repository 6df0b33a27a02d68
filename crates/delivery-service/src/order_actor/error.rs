//! Error types for the Order actor.

use crate::agent_actor::AgentError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Malformed input: empty items, missing user, bad quantity or threshold.
    #[error("Invalid order: {0}")]
    Validation(String),

    /// The order, or an agent it refers to, does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request is well-formed but the order's current state forbids it.
    #[error("Order conflict: {0}")]
    Conflict(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

/// Directory failures seen while assigning an agent.
impl From<AgentError> for OrderError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::Validation(msg) => OrderError::Validation(msg),
            AgentError::NotFound(msg) => OrderError::NotFound(format!("agent {msg}")),
            AgentError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}
