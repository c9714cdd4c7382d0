//! Login use case.

use std::sync::Arc;

use placely_domain::{EmailAddress, User};

use crate::infrastructure::ports::{PasswordHasherPort, UserRepo};

use super::error::UserError;

/// Login use case.
///
/// Unknown email and failed verification are indistinguishable to the
/// caller: both surface as invalid credentials.
pub struct Login {
    users: Arc<dyn UserRepo>,
    hasher: Arc<dyn PasswordHasherPort>,
}

impl Login {
    pub fn new(users: Arc<dyn UserRepo>, hasher: Arc<dyn PasswordHasherPort>) -> Self {
        Self { users, hasher }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<User, UserError> {
        let email = EmailAddress::new(email).map_err(|_| UserError::InvalidCredentials)?;

        let user = self
            .users
            .get_by_email(&email)
            .await
            .map_err(UserError::LoginFailed)?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.hasher.verify(password, user.password_hash()) {
            return Err(UserError::InvalidCredentials);
        }

        tracing::debug!(user_id = %user.id(), "Logged in user");
        Ok(user)
    }
}
