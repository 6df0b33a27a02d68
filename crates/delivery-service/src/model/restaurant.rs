/// A restaurant and its embedded menu.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](actor_framework::ResourceActor); menu changes go through
/// [`RestaurantAction`](crate::restaurant_actor::RestaurantAction).
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub u32);

impl From<u32> for RestaurantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

/// Identifier of a menu item, unique within its restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub cuisine: String,
    pub address: String,
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Next free menu item id: one past the highest issued so far.
    pub fn next_menu_item_id(&self) -> MenuItemId {
        let last = self.menu.iter().map(|item| item.id.0).max().unwrap_or(0);
        MenuItemId(last + 1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub cuisine: String,
    pub address: String,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
}

/// List filters understood by the restaurant catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum RestaurantQuery {
    /// Case-insensitive cuisine match.
    ByCuisine(String),
}
