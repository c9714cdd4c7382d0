//! Create place use case.
//!
//! Orchestrates: address resolution, owner validation, and the atomic
//! two-write persistence that links the new place to its owner.

use std::sync::Arc;

use placely_domain::{Place, PlaceTitle};

use crate::infrastructure::ports::{
    ClockPort, GeocodePort, PlaceOwnershipRepo, UserRepo,
};

use super::error::PlaceError;
use super::types::PlaceDraft;

/// Create place use case.
pub struct CreatePlace {
    users: Arc<dyn UserRepo>,
    ownership: Arc<dyn PlaceOwnershipRepo>,
    geocoder: Arc<dyn GeocodePort>,
    clock: Arc<dyn ClockPort>,
}

impl CreatePlace {
    pub fn new(
        users: Arc<dyn UserRepo>,
        ownership: Arc<dyn PlaceOwnershipRepo>,
        geocoder: Arc<dyn GeocodePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            users,
            ownership,
            geocoder,
            clock,
        }
    }

    /// Execute the create place use case.
    ///
    /// # Returns
    /// * `Ok(Place)` - The created place, already linked to its owner
    /// * `Err(PlaceError)` - Nothing was persisted
    pub async fn execute(&self, draft: PlaceDraft) -> Result<Place, PlaceError> {
        // Resolve coordinates before touching the datastore; an unresolvable
        // address must leave no trace.
        let location = self
            .geocoder
            .resolve(&draft.address)
            .await
            .map_err(PlaceError::Geocode)?;

        let owner = self
            .users
            .get(draft.creator)
            .await
            .map_err(PlaceError::CreateFailed)?
            .ok_or(PlaceError::OwnerNotFound(draft.creator))?;

        let title = PlaceTitle::new(&draft.title)?;
        let place = Place::new(
            title,
            draft.description,
            draft.address,
            location,
            owner.id(),
            self.clock.now(),
        )
        .with_image_url(draft.image_url);

        // Both writes (place node + owner back-reference) commit together
        // or not at all.
        self.ownership
            .create_owned(&place)
            .await
            .map_err(PlaceError::CreateFailed)?;

        tracing::info!(place_id = %place.id, owner_id = %owner.id(), "Created place");
        Ok(place)
    }
}
