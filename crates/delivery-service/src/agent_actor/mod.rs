//! # Delivery Agent Actor
//!
//! The agent directory: couriers with a rating, queried by the order actor when it assigns
//! an agent.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`DeliveryAgent`](crate::model::DeliveryAgent)
//! - [`error`] - [`AgentError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use delivery_service::agent_actor;
//! use delivery_service::clients::AgentClient;
//! use delivery_service::model::AgentCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = agent_actor::new(32);
//!     let client = AgentClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     client.create_agent(AgentCreate { name: "Asha".into(), rating: 4.7 }).await?;
//!     let top = client.find_by_min_rating(4.5).await?;
//!     assert_eq!(top.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use entity::AgentAction;
pub use error::*;

use crate::model::DeliveryAgent;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new DeliveryAgent actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<DeliveryAgent>, ResourceClient<DeliveryAgent>) {
    ResourceActor::new(buffer_size)
}
