//! Custom actions for the Restaurant actor.
//!
//! The menu is embedded in the restaurant, so menu operations are actions on the owning
//! [`Restaurant`](crate::model::Restaurant) rather than a separate resource.

use crate::model::{MenuItem, MenuItemCreate};

#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// Appends an item to the menu.
    ///
    /// # Errors
    /// Fails if the name is blank or the price is not a positive number.
    AddMenuItem(MenuItemCreate),
    /// Reads the current menu without modifying it.
    GetMenu,
}

/// Results from RestaurantActions - variants match 1:1 with RestaurantAction
#[derive(Debug, Clone)]
pub enum RestaurantActionResult {
    AddMenuItem(MenuItem),
    GetMenu(Vec<MenuItem>),
}
