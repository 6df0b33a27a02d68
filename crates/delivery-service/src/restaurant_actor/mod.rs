//! # Restaurant Actor
//!
//! The restaurant catalog: restaurants with a cuisine and an embedded menu. It has no workflow
//! and no link to the order lifecycle.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`Restaurant`](crate::model::Restaurant)
//! - [`error`] - [`RestaurantError`]
//! - [`actions`] - [`RestaurantAction`] and [`RestaurantActionResult`] for the menu
//!
//! ## Usage
//!
//! ```rust
//! use delivery_service::clients::RestaurantClient;
//! use delivery_service::model::{MenuItemCreate, RestaurantCreate};
//! use delivery_service::restaurant_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = restaurant_actor::new(32);
//!     let client = RestaurantClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_restaurant(RestaurantCreate {
//!             name: "Trattoria".into(),
//!             cuisine: "Italian".into(),
//!             address: "1 Via Roma".into(),
//!         })
//!         .await?;
//!     client.add_menu_item(id, MenuItemCreate { name: "Margherita".into(), price: 9.5 }).await?;
//!     assert_eq!(client.get_menu(id).await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Restaurant;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, ResourceClient<Restaurant>) {
    ResourceActor::new(buffer_size)
}
