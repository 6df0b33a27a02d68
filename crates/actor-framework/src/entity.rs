//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Order, DeliveryAgent,
//! Restaurant, …) must implement to be managed by the generic `ResourceActor`. It specifies
//! associated types for IDs, DTOs, list filters, actions, context, and errors, and provides
//! lifecycle hooks (`on_create`, `on_update`, `handle_action`) plus a `matches` predicate
//! used by `List` requests.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] defaults to `Ok(())`.
//! - [`ActorEntity::matches`] defaults to `true`, so entities without a meaningful filter
//!   can use `()` as their `Filter` type.
//!
//! # Working Copies
//! `on_update` and `handle_action` are invoked on a clone of the stored entity. The actor only
//! writes the clone back when the hook returns `Ok`, so a hook that fails halfway through never
//! leaves a partially mutated entity behind.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other
/// actors). The `Context` type is injected into every hook by mutable reference, so a context can
/// carry stateful collaborators such as a random-number generator. Dependencies are bound late:
/// they are passed to `run()` instead of `new()`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    ///
    /// Must be convertible from `u32` for automatic ID generation, and ordered so that
    /// listing returns entities in the order they were created.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Criteria accepted by `List` requests.
    type Filter: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `AssignAgent`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message. Clients recover the concrete type by
    /// downcasting [`FrameworkError::EntityError`](crate::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create` and is the place for input validation.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity satisfies a `List` filter.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &mut Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &mut Self::Context,
    ) -> Result<(), Self::Error>;

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &mut Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
