/// A courier that can be bound to orders.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](actor_framework::ResourceActor); see
/// [`impl ActorEntity for DeliveryAgent`](#impl-ActorEntity-for-DeliveryAgent).
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Delivery Agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl From<u32> for AgentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "agent_{}", self.0)
    }
}

/// Highest rating an agent can hold.
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAgent {
    pub id: AgentId,
    pub name: String,
    pub rating: f64,
}

impl DeliveryAgent {
    pub fn new(id: AgentId, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
        }
    }

    /// Eligibility test shared by the directory filter and the assignment policy.
    pub fn rated_at_least(&self, threshold: f64) -> bool {
        self.rating >= threshold
    }
}

/// Payload for registering a new agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentCreate {
    pub name: String,
    pub rating: f64,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentUpdate {
    pub name: Option<String>,
    pub rating: Option<f64>,
}

/// List filters understood by the agent directory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AgentQuery {
    MinRating(f64),
}
