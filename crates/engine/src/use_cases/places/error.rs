//! Place operation errors.

use placely_domain::{DomainError, PlaceId, UserId};

use crate::infrastructure::ports::{GeocodeError, RepoError};

/// Errors that can occur during place operations.
///
/// The operation-specific variants (`CreateFailed`, `DeleteFailed`,
/// `UpdateFailed`) wrap any repository failure that happened while a
/// mutation was in flight; by the time one of these surfaces, the atomic
/// scope has already been rolled back.
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    #[error("Could not find a place for the provided id")]
    PlaceNotFound(PlaceId),
    #[error("Could not find an owner for the provided id")]
    OwnerNotFound(UserId),
    #[error("Could not find places for the provided user id")]
    NoPlacesForOwner(UserId),
    #[error("Could not resolve coordinates for the address")]
    Geocode(#[source] GeocodeError),
    #[error("Creating place failed, please try again")]
    CreateFailed(#[source] RepoError),
    #[error("Could not delete place")]
    DeleteFailed(#[source] RepoError),
    #[error("Could not change place information")]
    UpdateFailed(#[source] RepoError),
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
