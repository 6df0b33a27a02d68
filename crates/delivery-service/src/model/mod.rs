//! # Domain Model
//!
//! Plain data types for every resource, plus the DTOs used to create, update, and query them.
//! The [`ActorEntity`](actor_framework::ActorEntity) implementations live next to each actor.

pub mod agent;
pub mod order;
pub mod restaurant;

pub use agent::*;
pub use order::*;
pub use restaurant::*;
