//! User operation errors.

use placely_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during user operations.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Email exists already, please login instead")]
    EmailTaken,
    #[error("Invalid credentials, could not log you in")]
    InvalidCredentials,
    #[error("Signing up failed, please try again later")]
    SignupFailed(#[source] anyhow::Error),
    #[error("Logging in failed, please try again later")]
    LoginFailed(#[source] RepoError),
    #[error("Fetching users failed, please try again later")]
    ListFailed(#[source] RepoError),
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
}
