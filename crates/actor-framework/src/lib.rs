//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent actor systems. The crate applies a
//! **Resource-Oriented Architecture (ROA)** on top of the **Actor Model**: every resource
//! type gets one actor that owns its state and serves a uniform set of requests.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]): business rules and domain models.
//! 2. **Runtime Layer** ([`ResourceActor`]): message processing and concurrency.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]): type-safe communication.
//!
//! Business logic is written once, in the entity's hooks; the runtime handles message passing,
//! error wrapping, and state management.
//!
//! ## Request Set
//!
//! Create, Get, List (with an entity-defined filter), Update, and Action. There is no delete.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run()`, not at construction time. An actor
//! can therefore depend on clients of actors created after it:
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Courier { id: u32 }
//! #[derive(Debug)] struct CourierCreate;
//! #[derive(Debug)] struct CourierUpdate;
//! #[derive(Debug)] enum CourierAction {}
//! #[derive(Debug, thiserror::Error)] #[error("courier error")] struct CourierError;
//!
//! #[async_trait]
//! impl ActorEntity for Courier {
//!     type Id = u32; type Create = CourierCreate; type Update = CourierUpdate; type Filter = ();
//!     type Action = CourierAction; type ActionResult = (); type Context = (); type Error = CourierError;
//!     fn from_create_params(id: u32, _: CourierCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: CourierUpdate, _: &mut ()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: CourierAction, _: &mut ()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[derive(Clone, Debug)] struct Delivery { id: u32, courier: Option<u32> }
//! #[derive(Debug)] struct DeliveryCreate;
//! #[derive(Debug)] struct DeliveryUpdate;
//! #[derive(Debug)] enum DeliveryAction { Dispatch }
//! #[derive(Debug, thiserror::Error)] #[error("delivery error: {0}")] struct DeliveryError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Delivery {
//!     type Id = u32; type Create = DeliveryCreate; type Update = DeliveryUpdate; type Filter = ();
//!     type Action = DeliveryAction; type ActionResult = u32;
//!     // Delivery depends on the courier actor
//!     type Context = ResourceClient<Courier>;
//!     type Error = DeliveryError;
//!
//!     fn from_create_params(id: u32, _: DeliveryCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, courier: None })
//!     }
//!     async fn on_update(&mut self, _: DeliveryUpdate, _: &mut Self::Context) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: DeliveryAction, couriers: &mut Self::Context) -> Result<u32, Self::Error> {
//!         let all = couriers.list(None).await.map_err(|e| DeliveryError(e.to_string()))?;
//!         let first = all.first().ok_or_else(|| DeliveryError("no courier".into()))?;
//!         self.courier = Some(first.id);
//!         Ok(first.id)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (courier_actor, courier_client) = ResourceActor::<Courier>::new(10);
//!     let (delivery_actor, delivery_client) = ResourceActor::<Delivery>::new(10);
//!
//!     tokio::spawn(courier_actor.run(()));
//!     tokio::spawn(delivery_actor.run(courier_client.clone()));
//!
//!     courier_client.create(CourierCreate).await.unwrap();
//!     let delivery = delivery_client.create(DeliveryCreate).await.unwrap();
//!     let courier = delivery_client.perform_action(delivery, DeliveryAction::Dispatch).await.unwrap();
//!     assert_eq!(courier, 1);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Messages are processed **sequentially** within an actor, so each request is an atomic
//!   read-modify-write on that actor's store.
//! - Update and Action hooks work on a copy that is committed only on success.
//! - Multiple actors run in parallel.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from scripted expectations, so code
//! that depends on an actor can be tested without spawning it.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
