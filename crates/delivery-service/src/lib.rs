//! # Delivery Service
//!
//! Order lifecycle and delivery-agent assignment for a food-delivery backend, built on the
//! generic actor framework. Each resource type (orders, delivery agents, restaurants) is owned
//! by one actor; typed clients wrap the actors' channels.
//!
//! - [`model`]: plain data types and DTOs.
//! - [`order_actor`], [`agent_actor`], [`restaurant_actor`]: entity implementations.
//! - [`assignment`]: the agent selection policy.
//! - [`clients`]: `OrderClient`, `AgentClient`, `RestaurantClient`.
//! - [`lifecycle`]: [`DeliverySystem`](lifecycle::DeliverySystem), configuration, tracing.

pub mod agent_actor;
pub mod assignment;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod restaurant_actor;
