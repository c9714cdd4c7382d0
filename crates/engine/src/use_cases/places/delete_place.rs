//! Delete place use case.
//!
//! Loads the place together with its owner reference, then removes both
//! the node and the owner's back-reference in one atomic scope.

use std::sync::Arc;

use placely_domain::PlaceId;

use crate::infrastructure::ports::{PlaceOwnershipRepo, PlaceRepo};

use super::error::PlaceError;

/// Delete place use case.
pub struct DeletePlace {
    places: Arc<dyn PlaceRepo>,
    ownership: Arc<dyn PlaceOwnershipRepo>,
}

impl DeletePlace {
    pub fn new(places: Arc<dyn PlaceRepo>, ownership: Arc<dyn PlaceOwnershipRepo>) -> Self {
        Self { places, ownership }
    }

    /// Execute the delete place use case.
    ///
    /// # Returns
    /// * `Ok(())` - Place and back-reference removed together
    /// * `Err(PlaceError)` - Datastore left exactly as before the call
    pub async fn execute(&self, place_id: PlaceId) -> Result<(), PlaceError> {
        let place = self
            .places
            .get(place_id)
            .await
            .map_err(PlaceError::DeleteFailed)?
            .ok_or(PlaceError::PlaceNotFound(place_id))?;

        self.ownership
            .delete_owned(&place)
            .await
            .map_err(PlaceError::DeleteFailed)?;

        tracing::info!(place_id = %place_id, owner_id = %place.creator, "Deleted place");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockPlaceOwnershipRepo, MockPlaceRepo, RepoError};
    use chrono::{TimeZone, Utc};
    use placely_domain::{GeoPoint, Place, PlaceTitle, UserId};

    fn test_place(id: PlaceId, creator: UserId) -> Place {
        Place::new(
            PlaceTitle::new("Cafe").expect("valid title"),
            "nice place to sit",
            "1 Main St",
            GeoPoint::new(40.0, -73.0).expect("valid point"),
            creator,
            Utc.timestamp_opt(1_700_000_000, 0).single().expect("valid ts"),
        )
        .with_id(id)
    }

    #[tokio::test]
    async fn when_place_missing_returns_not_found() {
        let place_id = PlaceId::new();

        let mut places = MockPlaceRepo::new();
        places
            .expect_get()
            .withf(move |id| *id == place_id)
            .returning(|_| Ok(None));

        // No expectation on the ownership repo: a write would panic.
        let ownership = MockPlaceOwnershipRepo::new();

        let use_case = DeletePlace::new(Arc::new(places), Arc::new(ownership));
        let result = use_case.execute(place_id).await;

        assert!(matches!(result, Err(PlaceError::PlaceNotFound(id)) if id == place_id));
    }

    #[tokio::test]
    async fn when_linked_removal_fails_surfaces_delete_failed() {
        let place_id = PlaceId::new();
        let creator = UserId::new();

        let mut places = MockPlaceRepo::new();
        let place = test_place(place_id, creator);
        places
            .expect_get()
            .returning(move |_| Ok(Some(place.clone())));

        let mut ownership = MockPlaceOwnershipRepo::new();
        ownership
            .expect_delete_owned()
            .returning(|_| Err(RepoError::database("commit", "connection reset")));

        let use_case = DeletePlace::new(Arc::new(places), Arc::new(ownership));
        let result = use_case.execute(place_id).await;

        assert!(matches!(result, Err(PlaceError::DeleteFailed(_))));
    }

    #[tokio::test]
    async fn when_valid_input_removes_place_and_backref_together() {
        let place_id = PlaceId::new();
        let creator = UserId::new();

        let mut places = MockPlaceRepo::new();
        let place = test_place(place_id, creator);
        places
            .expect_get()
            .returning(move |_| Ok(Some(place.clone())));

        let mut ownership = MockPlaceOwnershipRepo::new();
        ownership
            .expect_delete_owned()
            .withf(move |place| place.id == place_id && place.creator == creator)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeletePlace::new(Arc::new(places), Arc::new(ownership));
        use_case.execute(place_id).await.expect("delete succeeds");
    }
}
