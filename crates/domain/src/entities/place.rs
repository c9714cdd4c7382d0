//! Place entity - a point of interest owned by exactly one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{PlaceId, UserId};
use crate::value_objects::{GeoPoint, PlaceTitle};

/// A point of interest with a postal address and resolved coordinates.
///
/// This is a data-carrying struct with no internal invariants to protect;
/// the cross-entity invariant (`creator` must reference an existing user,
/// and that user's place list must contain this id) is enforced by the
/// ownership writes, not by this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub title: PlaceTitle,
    pub description: String,
    pub address: String,
    pub location: GeoPoint,
    pub image_url: Option<String>,
    /// The owning user. Set once at creation, never reassigned.
    pub creator: UserId,
    pub created_at: DateTime<Utc>,
}

impl Place {
    pub fn new(
        title: PlaceTitle,
        description: impl Into<String>,
        address: impl Into<String>,
        location: GeoPoint,
        creator: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: PlaceId::new(),
            title,
            description: description.into(),
            address: address.into(),
            location,
            image_url: None,
            creator,
            created_at,
        }
    }

    pub fn with_id(mut self, id: PlaceId) -> Self {
        self.id = id;
        self
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_place_records_its_creator() {
        let owner = UserId::new();
        let place = Place::new(
            PlaceTitle::new("Cafe").expect("valid title"),
            "nice place to sit",
            "1 Main St",
            GeoPoint::new(40.0, -73.0).expect("valid point"),
            owner,
            Utc::now(),
        );
        assert_eq!(place.creator, owner);
        assert!(place.image_url.is_none());
    }
}
