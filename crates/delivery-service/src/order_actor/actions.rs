//! Custom actions for the Order actor.
//!
//! Cancellation and agent assignment are actions rather than plain updates because each one
//! runs its own precondition checks, and assignment consults the agent directory. Both return
//! the committed [`Order`](crate::model::Order).

use super::error::OrderError;
use crate::model::AgentId;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Cancels the order. Refused once it is out for delivery or terminal.
    Cancel,
    /// Binds a delivery agent chosen by the selector.
    AssignAgent(AgentSelector),
}

/// How the agent for an assignment is chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentSelector {
    /// Uniform random choice over the whole directory.
    Random,
    /// This exact agent.
    Explicit(AgentId),
    /// The first agent whose name matches exactly.
    Named(String),
    /// Uniform random choice among agents rated at least this high.
    MinRating(f64),
}

impl AgentSelector {
    /// Rejects selectors that could never match, before any state is inspected.
    pub fn validate(&self) -> Result<(), OrderError> {
        match self {
            AgentSelector::MinRating(threshold) if !threshold.is_finite() => Err(OrderError::Validation(
                format!("rating threshold must be a finite number, got {threshold}"),
            )),
            AgentSelector::Named(name) if name.trim().is_empty() => {
                Err(OrderError::Validation("agent name must not be blank".into()))
            }
            _ => Ok(()),
        }
    }
}

impl From<Option<AgentId>> for AgentSelector {
    /// An explicit id when given, otherwise a random pick.
    fn from(agent: Option<AgentId>) -> Self {
        agent.map_or(AgentSelector::Random, AgentSelector::Explicit)
    }
}
