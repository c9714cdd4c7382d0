//! Get place use case.

use std::sync::Arc;

use placely_domain::{Place, PlaceId};

use crate::infrastructure::ports::PlaceRepo;

use super::error::PlaceError;

/// Get place by id use case.
pub struct GetPlace {
    places: Arc<dyn PlaceRepo>,
}

impl GetPlace {
    pub fn new(places: Arc<dyn PlaceRepo>) -> Self {
        Self { places }
    }

    pub async fn execute(&self, place_id: PlaceId) -> Result<Place, PlaceError> {
        self.places
            .get(place_id)
            .await?
            .ok_or(PlaceError::PlaceNotFound(place_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockPlaceRepo;
    use chrono::{TimeZone, Utc};
    use placely_domain::{GeoPoint, PlaceTitle, UserId};

    #[tokio::test]
    async fn when_place_missing_returns_not_found() {
        let mut places = MockPlaceRepo::new();
        places.expect_get().returning(|_| Ok(None));

        let use_case = GetPlace::new(Arc::new(places));
        let result = use_case.execute(PlaceId::new()).await;

        assert!(matches!(result, Err(PlaceError::PlaceNotFound(_))));
    }

    #[tokio::test]
    async fn repeated_reads_return_equal_results() {
        let place_id = PlaceId::new();
        let place = Place::new(
            PlaceTitle::new("Cafe").expect("valid title"),
            "nice place to sit",
            "1 Main St",
            GeoPoint::new(40.0, -73.0).expect("valid point"),
            UserId::new(),
            Utc.timestamp_opt(1_700_000_000, 0).single().expect("valid ts"),
        )
        .with_id(place_id);

        let mut places = MockPlaceRepo::new();
        let stored = place.clone();
        places
            .expect_get()
            .times(2)
            .returning(move |_| Ok(Some(stored.clone())));

        let use_case = GetPlace::new(Arc::new(places));
        let first = use_case.execute(place_id).await.expect("first read");
        let second = use_case.execute(place_id).await.expect("second read");

        assert_eq!(first.id, second.id);
        assert_eq!(first.title, second.title);
        assert_eq!(first.location, second.location);
    }
}
