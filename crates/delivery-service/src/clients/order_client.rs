//! # Order Client
//!
//! Provides a high-level API for the order lifecycle. It wraps a `ResourceClient<Order>`; the
//! transition rules themselves run inside the Order actor's hooks.
use crate::model::{AgentId, Order, OrderCreate, OrderId, OrderQuery, OrderStatus, StatusUpdate, UserId};
use crate::order_actor::{AgentSelector, OrderAction, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order and returns it exactly as it was stored, with status `PLACED`.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("create_order called");
        let (id, order) = self.inner.create_entity(params).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order placed");
        Ok(order)
    }

    /// Fetches an order, failing with `NotFound` when it does not exist.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_user_orders(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        self.list(Some(OrderQuery::ByUser(user_id))).await
    }

    #[instrument(skip(self))]
    pub async fn list_orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        self.list(Some(OrderQuery::ByStatus(status))).await
    }

    #[instrument(skip(self))]
    pub async fn update_order_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id, StatusUpdate { status })
            .await
            .map_err(Self::map_error)
    }

    /// Assigns an agent: the given one, or a random pick from the whole directory.
    #[instrument(skip(self))]
    pub async fn assign_agent(&self, id: OrderId, agent: Option<AgentId>) -> Result<Order, OrderError> {
        self.assign_agent_with(id, AgentSelector::from(agent)).await
    }

    #[instrument(skip(self))]
    pub async fn assign_agent_with(&self, id: OrderId, selector: AgentSelector) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::AssignAgent(selector))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Cancel)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .downcast_entity::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}
