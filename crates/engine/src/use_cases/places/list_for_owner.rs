//! List places for owner use case.

use std::sync::Arc;

use placely_domain::{Place, UserId};

use crate::infrastructure::ports::{PlaceRepo, UserRepo};

use super::error::PlaceError;

/// List the places owned by a user.
///
/// An unknown user and a user owning nothing both surface as not-found,
/// matching the external contract of the listing endpoint.
pub struct ListOwnedPlaces {
    users: Arc<dyn UserRepo>,
    places: Arc<dyn PlaceRepo>,
}

impl ListOwnedPlaces {
    pub fn new(users: Arc<dyn UserRepo>, places: Arc<dyn PlaceRepo>) -> Self {
        Self { users, places }
    }

    pub async fn execute(&self, owner_id: UserId) -> Result<Vec<Place>, PlaceError> {
        let owner = self
            .users
            .get(owner_id)
            .await?
            .ok_or(PlaceError::NoPlacesForOwner(owner_id))?;

        let places = self.places.list_by_owner(owner.id()).await?;
        if places.is_empty() {
            return Err(PlaceError::NoPlacesForOwner(owner_id));
        }

        Ok(places)
    }
}
