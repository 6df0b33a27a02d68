//! # Domain Clients
//!
//! Typed wrappers around each actor's [`ResourceClient`](actor_framework::ResourceClient).
//! They translate [`FrameworkError`](actor_framework::FrameworkError) back into the actor's
//! own error enum, so callers match on `OrderError::Conflict` rather than on boxed errors.
//! `get` and `list` come from [`ActorClient`](actor_framework::ActorClient).

pub mod agent_client;
pub mod order_client;
pub mod restaurant_client;

pub use agent_client::AgentClient;
pub use order_client::OrderClient;
pub use restaurant_client::RestaurantClient;
