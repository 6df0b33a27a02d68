//! Entity trait implementation for the Restaurant domain type.

use super::actions::{RestaurantAction, RestaurantActionResult};
use super::error::RestaurantError;
use crate::model::{MenuItem, MenuItemCreate, Restaurant, RestaurantCreate, RestaurantId, RestaurantQuery, RestaurantUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn required(field: &str, value: &str) -> Result<(), RestaurantError> {
    if value.trim().is_empty() {
        return Err(RestaurantError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

fn validate_menu_item(params: &MenuItemCreate) -> Result<(), RestaurantError> {
    required("menu item name", &params.name)?;
    if !params.price.is_finite() || params.price <= 0.0 {
        return Err(RestaurantError::Validation(format!(
            "price must be a positive number, got {}",
            params.price
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Filter = RestaurantQuery;
    type Action = RestaurantAction;
    type ActionResult = RestaurantActionResult;
    type Context = ();
    type Error = RestaurantError;

    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        required("name", &params.name)?;
        required("cuisine", &params.cuisine)?;
        Ok(Self {
            id,
            name: params.name,
            cuisine: params.cuisine,
            address: params.address,
            menu: Vec::new(),
        })
    }

    fn matches(&self, filter: &RestaurantQuery) -> bool {
        match filter {
            RestaurantQuery::ByCuisine(cuisine) => self.cuisine.eq_ignore_ascii_case(cuisine.trim()),
        }
    }

    async fn on_update(&mut self, update: RestaurantUpdate, _ctx: &mut ()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            required("name", &name)?;
            self.name = name;
        }
        if let Some(cuisine) = update.cuisine {
            required("cuisine", &cuisine)?;
            self.cuisine = cuisine;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        _ctx: &mut (),
    ) -> Result<RestaurantActionResult, Self::Error> {
        match action {
            RestaurantAction::AddMenuItem(params) => {
                validate_menu_item(&params)?;
                let item = MenuItem {
                    id: self.next_menu_item_id(),
                    name: params.name,
                    price: params.price,
                    available: true,
                };
                self.menu.push(item.clone());
                Ok(RestaurantActionResult::AddMenuItem(item))
            }
            RestaurantAction::GetMenu => Ok(RestaurantActionResult::GetMenu(self.menu.clone())),
        }
    }
}
