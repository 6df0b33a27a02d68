//! # Order Actor
//!
//! The order store and lifecycle engine. Orders are created `PLACED`, move forward one status
//! at a time, may be cancelled until they leave the kitchen, and get exactly one delivery
//! agent once confirmed.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`Order`](crate::model::Order)
//! - [`lifecycle`] - pure transition rules
//! - [`actions`] - [`OrderAction`] and [`AgentSelector`]
//! - [`context`] - [`OrderContext`], the agent client and assignment policy
//! - [`error`] - [`OrderError`]
//!
//! ## Dependencies
//!
//! The actor's context carries an [`AgentClient`](crate::clients::AgentClient), so it must be
//! started after the agent actor:
//!
//! ```rust
//! use delivery_service::assignment::AssignmentPolicy;
//! use delivery_service::clients::{AgentClient, OrderClient};
//! use delivery_service::model::{OrderCreate, OrderItem, UserId};
//! use delivery_service::order_actor::OrderContext;
//! use delivery_service::{agent_actor, order_actor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (agent_actor, agent_client) = agent_actor::new(32);
//!     let (order_actor, order_client) = order_actor::new(32);
//!     let agents = AgentClient::new(agent_client);
//!     let orders = OrderClient::new(order_client);
//!
//!     tokio::spawn(agent_actor.run(()));
//!     tokio::spawn(order_actor.run(OrderContext::new(agents, AssignmentPolicy::seeded(1))));
//!
//!     let order = orders
//!         .create_order(OrderCreate { user_id: Some(UserId(42)), items: vec![OrderItem::new("pizza", 2)] })
//!         .await?;
//!     orders.cancel_order(order.id).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod context;
pub mod entity;
pub mod error;
pub mod lifecycle;

pub use actions::*;
pub use context::OrderContext;
pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
