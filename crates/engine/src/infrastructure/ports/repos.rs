//! Repository port traits for database access.

use async_trait::async_trait;
use placely_domain::{EmailAddress, Place, PlaceId, User, UserId};

use super::error::RepoError;

// =============================================================================
// Database Ports (one per entity type)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Look up a user by id. `Ok(None)` means the user does not exist.
    async fn get(&self, id: UserId) -> Result<Option<User>, RepoError>;

    /// Look up a user by normalized email address.
    async fn get_by_email(&self, email: &EmailAddress) -> Result<Option<User>, RepoError>;

    /// List all users.
    async fn list(&self) -> Result<Vec<User>, RepoError>;

    /// Save a user (upsert). Commits immediately; single document, no
    /// relationship is touched here.
    async fn save(&self, user: &User) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceRepo: Send + Sync {
    /// Look up a place by id. `Ok(None)` means the place does not exist.
    async fn get(&self, id: PlaceId) -> Result<Option<Place>, RepoError>;

    /// List the places owned by a user, in creation order.
    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Place>, RepoError>;

    /// Overwrite the mutable fields of an existing place. Commits
    /// immediately; the ownership relationship is not touched.
    async fn update(&self, place: &Place) -> Result<(), RepoError>;
}

/// The only code path allowed to mutate a place together with its owner's
/// back-reference list. Both writes happen inside one atomic scope: either
/// both become visible or neither does.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceOwnershipRepo: Send + Sync {
    /// Persist a new place and append its id to the owner's place list.
    async fn create_owned(&self, place: &Place) -> Result<(), RepoError>;

    /// Remove a place and its id from the owner's place list.
    async fn delete_owned(&self, place: &Place) -> Result<(), RepoError>;
}
