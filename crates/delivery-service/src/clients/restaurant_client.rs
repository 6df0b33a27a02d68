//! # Restaurant Client
//!
//! Provides a high-level API for the restaurant catalog.
use crate::model::{
    MenuItem, MenuItemCreate, Restaurant, RestaurantCreate, RestaurantId, RestaurantQuery, RestaurantUpdate,
};
use crate::restaurant_actor::{RestaurantAction, RestaurantActionResult, RestaurantError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_restaurant(&self, params: RestaurantCreate) -> Result<RestaurantId, RestaurantError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_restaurant(&self, id: RestaurantId) -> Result<Restaurant, RestaurantError> {
        self.get(id)
            .await?
            .ok_or_else(|| RestaurantError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Restaurant>, RestaurantError> {
        self.list(None).await
    }

    #[instrument(skip(self))]
    pub async fn list_by_cuisine(&self, cuisine: &str) -> Result<Vec<Restaurant>, RestaurantError> {
        self.list(Some(RestaurantQuery::ByCuisine(cuisine.to_string())))
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Adds an item to the menu and returns it with its assigned id.
    #[instrument(skip(self))]
    pub async fn add_menu_item(&self, id: RestaurantId, item: MenuItemCreate) -> Result<MenuItem, RestaurantError> {
        debug!("Adding menu item to {}", id);
        match self
            .inner
            .perform_action(id, RestaurantAction::AddMenuItem(item))
            .await
            .map_err(Self::map_error)?
        {
            RestaurantActionResult::AddMenuItem(item) => Ok(item),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_menu(&self, id: RestaurantId) -> Result<Vec<MenuItem>, RestaurantError> {
        match self
            .inner
            .perform_action(id, RestaurantAction::GetMenu)
            .await
            .map_err(Self::map_error)?
        {
            RestaurantActionResult::GetMenu(menu) => Ok(menu),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: RestaurantActionResult) -> RestaurantError {
    RestaurantError::ActorCommunicationError(format!("mismatched action result: {result:?}"))
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => RestaurantError::NotFound(id),
            other => other
                .downcast_entity::<RestaurantError>()
                .unwrap_or_else(|e| RestaurantError::ActorCommunicationError(e.to_string())),
        }
    }
}
