//! Entity trait implementation for the DeliveryAgent domain type.
//!
//! Agents are plain reference data: no actions and no dependencies. Validation runs on both
//! create and update so a stored agent always has a name and a rating within range.

use super::error::AgentError;
use crate::model::{AgentCreate, AgentId, AgentQuery, AgentUpdate, DeliveryAgent, MAX_RATING};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Agents expose no custom actions.
#[derive(Debug, Clone)]
pub enum AgentAction {}

pub(crate) fn validate_name(name: &str) -> Result<(), AgentError> {
    if name.trim().is_empty() {
        return Err(AgentError::Validation("name must not be blank".into()));
    }
    Ok(())
}

pub(crate) fn validate_rating(rating: f64) -> Result<(), AgentError> {
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err(AgentError::Validation(format!(
            "rating must be between 0 and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for DeliveryAgent {
    type Id = AgentId;
    type Create = AgentCreate;
    type Update = AgentUpdate;
    type Filter = AgentQuery;
    type Action = AgentAction;
    type ActionResult = ();
    type Context = ();
    type Error = AgentError;

    fn from_create_params(id: AgentId, params: AgentCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        validate_rating(params.rating)?;
        Ok(Self::new(id, params.name, params.rating))
    }

    fn matches(&self, filter: &AgentQuery) -> bool {
        match filter {
            AgentQuery::MinRating(threshold) => self.rated_at_least(*threshold),
        }
    }

    /// # Fields Updated
    /// - `name`: display name, must not be blank
    /// - `rating`: 0.0 to 5.0
    async fn on_update(&mut self, update: AgentUpdate, _ctx: &mut ()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(rating) = update.rating {
            validate_rating(rating)?;
            self.rating = rating;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: AgentAction, _ctx: &mut ()) -> Result<(), Self::Error> {
        match action {}
    }
}
