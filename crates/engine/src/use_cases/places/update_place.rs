//! Update place use case.
//!
//! Single-node mutation: only the title and description change, the
//! ownership relationship is never touched, so no atomic scope is needed.

use std::sync::Arc;

use placely_domain::{Place, PlaceId, PlaceTitle};

use crate::infrastructure::ports::PlaceRepo;

use super::error::PlaceError;

/// Update place use case.
pub struct UpdatePlace {
    places: Arc<dyn PlaceRepo>,
}

impl UpdatePlace {
    pub fn new(places: Arc<dyn PlaceRepo>) -> Self {
        Self { places }
    }

    pub async fn execute(
        &self,
        place_id: PlaceId,
        title: String,
        description: String,
    ) -> Result<Place, PlaceError> {
        let mut place = self
            .places
            .get(place_id)
            .await?
            .ok_or(PlaceError::PlaceNotFound(place_id))?;

        place.title = PlaceTitle::new(title)?;
        place.description = description;

        self.places
            .update(&place)
            .await
            .map_err(PlaceError::UpdateFailed)?;

        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockPlaceRepo, RepoError};
    use chrono::{TimeZone, Utc};
    use placely_domain::{GeoPoint, UserId};

    fn test_place(id: PlaceId) -> Place {
        Place::new(
            PlaceTitle::new("Cafe").expect("valid title"),
            "nice place to sit",
            "1 Main St",
            GeoPoint::new(40.0, -73.0).expect("valid point"),
            UserId::new(),
            Utc.timestamp_opt(1_700_000_000, 0).single().expect("valid ts"),
        )
        .with_id(id)
    }

    #[tokio::test]
    async fn when_place_missing_returns_not_found() {
        let place_id = PlaceId::new();

        let mut places = MockPlaceRepo::new();
        places.expect_get().returning(|_| Ok(None));

        let use_case = UpdatePlace::new(Arc::new(places));
        let result = use_case
            .execute(place_id, "New title".to_string(), "new description".to_string())
            .await;

        assert!(matches!(result, Err(PlaceError::PlaceNotFound(_))));
    }

    #[tokio::test]
    async fn when_persistence_fails_surfaces_update_failed() {
        let place_id = PlaceId::new();

        let mut places = MockPlaceRepo::new();
        let place = test_place(place_id);
        places
            .expect_get()
            .returning(move |_| Ok(Some(place.clone())));
        places
            .expect_update()
            .returning(|_| Err(RepoError::database("query", "connection reset")));

        let use_case = UpdatePlace::new(Arc::new(places));
        let result = use_case
            .execute(place_id, "New title".to_string(), "new description".to_string())
            .await;

        assert!(matches!(result, Err(PlaceError::UpdateFailed(_))));
    }

    #[tokio::test]
    async fn when_valid_input_overwrites_mutable_fields_only() {
        let place_id = PlaceId::new();

        let mut places = MockPlaceRepo::new();
        let place = test_place(place_id);
        let original_creator = place.creator;
        places
            .expect_get()
            .returning(move |_| Ok(Some(place.clone())));
        places
            .expect_update()
            .withf(move |p| {
                p.id == place_id
                    && p.title.as_str() == "New title"
                    && p.description == "new description"
                    && p.address == "1 Main St"
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdatePlace::new(Arc::new(places));
        let updated = use_case
            .execute(place_id, "New title".to_string(), "new description".to_string())
            .await
            .expect("update succeeds");

        assert_eq!(updated.title.as_str(), "New title");
        assert_eq!(updated.creator, original_creator);
    }
}
