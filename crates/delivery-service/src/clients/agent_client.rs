//! # Agent Client
//!
//! High-level API for the agent directory.
use crate::agent_actor::AgentError;
use crate::model::{AgentCreate, AgentId, AgentQuery, AgentUpdate, DeliveryAgent};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the DeliveryAgent actor.
#[derive(Clone)]
pub struct AgentClient {
    inner: ResourceClient<DeliveryAgent>,
}

impl AgentClient {
    pub fn new(inner: ResourceClient<DeliveryAgent>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_agent(&self, params: AgentCreate) -> Result<AgentId, AgentError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetches an agent, failing with `NotFound` when it does not exist.
    #[instrument(skip(self))]
    pub async fn get_agent(&self, id: AgentId) -> Result<DeliveryAgent, AgentError> {
        self.get(id)
            .await?
            .ok_or_else(|| AgentError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<DeliveryAgent>, AgentError> {
        self.list(None).await
    }

    /// Agents rated at least `threshold`, in registration order.
    #[instrument(skip(self))]
    pub async fn find_by_min_rating(&self, threshold: f64) -> Result<Vec<DeliveryAgent>, AgentError> {
        self.list(Some(AgentQuery::MinRating(threshold))).await
    }

    #[instrument(skip(self))]
    pub async fn update_agent(&self, id: AgentId, update: AgentUpdate) -> Result<DeliveryAgent, AgentError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<DeliveryAgent> for AgentClient {
    type Error = AgentError;

    fn inner(&self) -> &ResourceClient<DeliveryAgent> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => AgentError::NotFound(id),
            other => other
                .downcast_entity::<AgentError>()
                .unwrap_or_else(|e| AgentError::ActorCommunicationError(e.to_string())),
        }
    }
}
