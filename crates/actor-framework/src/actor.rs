//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially*, so the store needs no `Mutex` or
/// `RwLock`. The same property makes every request a read-modify-write transaction: a hook
/// that awaits another actor still holds this actor's turn, and no other request for the same
/// store can observe or change the entity until the hook's result is committed.
///
/// The price of that guarantee is latency: while a hook awaits another actor, every other
/// request queued for this actor waits too, so a slow dependency slows the whole store. Hooks
/// should only await actors that answer from memory, and the dependency graph must stay acyclic
/// or two actors awaiting each other will stall.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Shift { id: u32, open: bool }
/// #[derive(Debug)] struct ShiftCreate;
/// #[derive(Debug)] struct ShiftUpdate;
/// #[derive(Debug)] enum ShiftAction { Close }
/// #[derive(Debug, thiserror::Error)] #[error("shift error")] struct ShiftError;
///
/// #[async_trait]
/// impl ActorEntity for Shift {
///     type Id = u32;
///     type Create = ShiftCreate;
///     type Update = ShiftUpdate;
///     type Filter = ();
///     type Action = ShiftAction;
///     type ActionResult = bool;
///     type Context = ();
///     type Error = ShiftError;
///
///     fn from_create_params(id: u32, _: ShiftCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, open: true })
///     }
///     async fn on_update(&mut self, _: ShiftUpdate, _: &mut ()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: ShiftAction, _: &mut ()) -> Result<bool, Self::Error> {
///         let was_open = self.open;
///         self.open = false;
///         Ok(was_open)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Shift>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(ShiftCreate).await.unwrap();
///     assert!(client.perform_action(id, ShiftAction::Close).await.unwrap());
///     assert!(!client.perform_action(id, ShiftAction::Close).await.unwrap());
/// }
/// ```
///
/// # Implementation Details
///
/// The store is a `BTreeMap` keyed by IDs minted from a `u32` counter, so iteration order is
/// creation order.
///
/// * **Create**: mint ID → `T::from_create_params` → `on_create` → insert, then reply with the
///   ID and the entity exactly as stored. IDs are never reused; once the `u32` counter is
///   exhausted every create is refused with [`FrameworkError::IdSpaceExhausted`].
/// * **Get**: clone of the stored entity, or `None`.
/// * **List**: clones of every entity accepted by [`ActorEntity::matches`].
/// * **Update** / **Action**: clone the stored entity, run the hook on the clone, and write the
///   clone back only if the hook succeeded.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, mut context: T::Context) {
        // Just the type name (e.g., "Order" instead of "delivery_service::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(following) = self.next_id.checked_add(1) else {
                        warn!(entity_type, size = self.store.len(), "Id space exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdSpaceExhausted));
                        continue;
                    };
                    let id = T::Id::from(self.next_id);
                    self.next_id = following;

                    let created = match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            let hook = item.on_create(&mut context).await;
                            hook.map(|()| item)
                        }
                        Err(e) => Err(e),
                    };
                    match created {
                        Ok(item) => {
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok((id, item)));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| filter.as_ref().map_or(true, |f| item.matches(f)))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(mut working) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    match working.on_update(update, &mut context).await {
                        Ok(()) => {
                            self.store.insert(id.clone(), working.clone());
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(working));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(mut working) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = working.handle_action(action, &mut context).await;
                    match result {
                        Ok(value) => {
                            self.store.insert(id.clone(), working);
                            info!(entity_type, %id, "Action ok");
                            let _ = respond_to.send(Ok(value));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
