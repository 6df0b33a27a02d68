//! Entity trait implementation for the Order domain type.
//!
//! The hooks here are the lifecycle engine: status updates go through
//! [`lifecycle::advance`](super::lifecycle::advance), and the two actions cancel the order or
//! bind a delivery agent picked by the [`AssignmentPolicy`](crate::assignment::AssignmentPolicy).
//!
//! Assignment awaits the agent directory from inside `handle_action`. The order actor does not
//! serve any other request meanwhile, so the precondition check and the write are one atomic
//! step for that order. Other order requests queue behind that lookup; the directory answers
//! from memory, so the wait is one in-process round trip and never a network call.

use super::actions::{AgentSelector, OrderAction};
use super::context::OrderContext;
use super::error::OrderError;
use super::lifecycle;
use crate::model::{DeliveryAgent, Order, OrderCreate, OrderId, OrderQuery, StatusUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{debug, info};

fn no_eligible_agent() -> OrderError {
    OrderError::Conflict("cannot assign agent: no eligible delivery agent".into())
}

/// Resolves a selector to a concrete agent using the directory and the policy's RNG.
async fn select_agent(selector: AgentSelector, ctx: &mut OrderContext) -> Result<DeliveryAgent, OrderError> {
    match selector {
        AgentSelector::Random => {
            let pool = ctx.agents.list_all().await?;
            ctx.policy.pick(&pool).ok_or_else(no_eligible_agent)
        }
        AgentSelector::Explicit(id) => Ok(ctx.agents.get_agent(id).await?),
        AgentSelector::Named(name) => {
            let pool = ctx.agents.list_all().await?;
            pool.into_iter()
                .find(|agent| agent.name == name)
                .ok_or_else(|| OrderError::NotFound(format!("no agent named {name}")))
        }
        AgentSelector::MinRating(threshold) => {
            let pool = ctx.agents.find_by_min_rating(threshold).await?;
            ctx.policy.pick(&pool).ok_or_else(no_eligible_agent)
        }
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = StatusUpdate;
    type Filter = OrderQuery;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = OrderContext;
    type Error = OrderError;

    /// Validates the request and builds a `PLACED` order.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        let user_id = params
            .user_id
            .ok_or_else(|| OrderError::Validation("user id is required".into()))?;
        if params.items.is_empty() {
            return Err(OrderError::Validation("order must contain at least one item".into()));
        }
        for item in &params.items {
            if item.menu_item.trim().is_empty() {
                return Err(OrderError::Validation("menu item reference must not be blank".into()));
            }
            if item.quantity == 0 {
                return Err(OrderError::Validation(format!(
                    "quantity for {} must be at least 1",
                    item.menu_item
                )));
            }
        }
        Ok(Order::new(id, user_id, params.items))
    }

    fn matches(&self, filter: &OrderQuery) -> bool {
        match filter {
            OrderQuery::ByUser(user_id) => self.user_id == *user_id,
            OrderQuery::ByStatus(status) => self.status == *status,
        }
    }

    async fn on_update(&mut self, update: StatusUpdate, _ctx: &mut OrderContext) -> Result<(), Self::Error> {
        let from = self.status;
        lifecycle::advance(self, update.status)?;
        info!(order_id = %self.id, %from, to = %self.status, "Status changed");
        Ok(())
    }

    /// # Actions
    /// - `Cancel`: allowed from `PLACED`, `CONFIRMED`, `PREPARING`
    /// - `AssignAgent`: allowed from `CONFIRMED`, `PREPARING`, `OUT_FOR_DELIVERY`, once
    async fn handle_action(&mut self, action: OrderAction, ctx: &mut OrderContext) -> Result<Order, Self::Error> {
        match action {
            OrderAction::Cancel => {
                lifecycle::cancel(self)?;
                info!(order_id = %self.id, "Cancelled");
            }
            OrderAction::AssignAgent(selector) => {
                selector.validate()?;
                lifecycle::check_assignable(self)?;
                debug!(order_id = %self.id, ?selector, "Selecting agent");
                let agent = select_agent(selector, ctx).await?;
                lifecycle::bind_agent(self, &agent)?;
                info!(order_id = %self.id, agent_id = %agent.id, agent = %agent.name, "Agent assigned");
            }
        }
        Ok(self.clone())
    }
}
