//! User entity - an account that owns places.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{PlaceId, UserId};
use crate::value_objects::EmailAddress;

/// An account that owns a set of places.
///
/// Fields are private because the `places` back-reference list carries an
/// invariant: it must mirror exactly the Place records whose `creator` is
/// this user. The list is only ever rewritten through [`User::link_place`] /
/// [`User::unlink_place`], and those are called solely by the ownership
/// writes that also persist the Place side of the relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: EmailAddress,
    password_hash: String,
    image_url: Option<String>,
    places: Vec<PlaceId>,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: EmailAddress,
        password_hash: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email,
            password_hash: password_hash.into(),
            image_url: None,
            places: Vec::new(),
            created_at,
        }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Rebuild the back-reference list from storage.
    pub fn with_places(mut self, places: Vec<PlaceId>) -> Self {
        self.places = places;
        self
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Ids of the places this user owns, in creation order.
    pub fn places(&self) -> &[PlaceId] {
        &self.places
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn owns(&self, place_id: PlaceId) -> bool {
        self.places.contains(&place_id)
    }

    /// Append a place id to the back-reference list.
    ///
    /// Idempotent: linking an already-linked id is a no-op, so a retried
    /// write cannot duplicate an entry.
    pub fn link_place(&mut self, place_id: PlaceId) {
        if !self.places.contains(&place_id) {
            self.places.push(place_id);
        }
    }

    /// Remove a place id from the back-reference list.
    pub fn unlink_place(&mut self, place_id: PlaceId) {
        self.places.retain(|id| *id != place_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(
            "Alice",
            EmailAddress::new("a@x.com").expect("valid email"),
            "$argon2id$stub",
            Utc::now(),
        )
    }

    #[test]
    fn new_user_owns_nothing() {
        let user = test_user();
        assert!(user.places().is_empty());
    }

    #[test]
    fn link_and_unlink_keep_the_list_symmetric() {
        let mut user = test_user();
        let first = PlaceId::new();
        let second = PlaceId::new();

        user.link_place(first);
        user.link_place(second);
        assert_eq!(user.places(), &[first, second]);
        assert!(user.owns(first));

        user.unlink_place(first);
        assert_eq!(user.places(), &[second]);
        assert!(!user.owns(first));
    }

    #[test]
    fn linking_twice_does_not_duplicate() {
        let mut user = test_user();
        let place_id = PlaceId::new();
        user.link_place(place_id);
        user.link_place(place_id);
        assert_eq!(user.places().len(), 1);
    }
}
