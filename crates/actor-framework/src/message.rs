//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one type of resource (the [`ActorEntity`]). Instead of ad-hoc messages for
/// every operation, requests are standardized around a small set of lifecycle operations:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource and replies with
///   its ID and the entity as stored, in the same turn.
/// - **Get**: Fetches the current state of the resource by ID.
/// - **List**: Returns every resource matching an optional [`ActorEntity::Filter`], in
///   creation order.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Action**: Executes a custom [`ActorEntity::Action`].
///
/// There is no delete: resources managed here are retired through their own
/// state (e.g. a cancelled order), never removed.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<(T::Id, T)>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
