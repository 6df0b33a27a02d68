//! # ActorClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default `get` and `list`
//! methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read operations.
///
/// Implementors supply the inner [`ResourceClient`] and a mapping from [`FrameworkError`] to
/// their own error type; `get` and `list` come for free.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Courier { id: u32, on_shift: bool }
/// #[derive(Debug)] struct CourierCreate;
/// #[derive(Debug)] struct CourierUpdate;
/// #[derive(Debug)] enum CourierAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct CourierError(String);
///
/// impl From<String> for CourierError {
///     fn from(s: String) -> Self { CourierError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Courier {
///     type Id = u32;
///     type Create = CourierCreate;
///     type Update = CourierUpdate;
///     type Filter = bool;
///     type Action = CourierAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = CourierError;
///
///     fn from_create_params(id: u32, _: CourierCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, on_shift: false })
///     }
///     fn matches(&self, on_shift: &bool) -> bool { self.on_shift == *on_shift }
///     async fn on_update(&mut self, _: CourierUpdate, _: &mut ()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: CourierAction, _: &mut ()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct CourierClient {
///     inner: ResourceClient<Courier>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Courier> for CourierClient {
///     type Error = CourierError;
///
///     fn inner(&self) -> &ResourceClient<Courier> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CourierError(e.to_string())
///     }
/// }
///
/// async fn usage(client: CourierClient) {
///     // get() and list() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list(Some(true)).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// List entities matching a filter, in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: Option<T::Filter>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(filter).await.map_err(Self::map_error)
    }
}
