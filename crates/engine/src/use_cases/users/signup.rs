//! Signup use case.

use std::sync::Arc;

use placely_domain::{EmailAddress, User};

use crate::infrastructure::ports::{ClockPort, PasswordHasherPort, UserRepo};

use super::error::UserError;

/// Fields for an account that does not exist yet.
#[derive(Debug, Clone)]
pub struct SignupDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub image_url: Option<String>,
}

/// Signup use case.
///
/// Orchestrates: duplicate-email check, password hashing, persistence of a
/// user that owns nothing yet.
pub struct Signup {
    users: Arc<dyn UserRepo>,
    hasher: Arc<dyn PasswordHasherPort>,
    clock: Arc<dyn ClockPort>,
}

impl Signup {
    pub fn new(
        users: Arc<dyn UserRepo>,
        hasher: Arc<dyn PasswordHasherPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            users,
            hasher,
            clock,
        }
    }

    pub async fn execute(&self, draft: SignupDraft) -> Result<User, UserError> {
        let email = EmailAddress::new(&draft.email)?;

        let existing = self
            .users
            .get_by_email(&email)
            .await
            .map_err(|e| UserError::SignupFailed(e.into()))?;
        if existing.is_some() {
            return Err(UserError::EmailTaken);
        }

        let password_hash = self
            .hasher
            .hash(&draft.password)
            .map_err(|e| UserError::SignupFailed(e.into()))?;

        let user = User::new(draft.name, email, password_hash, self.clock.now())
            .with_image_url(draft.image_url);

        self.users
            .save(&user)
            .await
            .map_err(|e| UserError::SignupFailed(e.into()))?;

        tracing::info!(user_id = %user.id(), "Signed up user");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockPasswordHasherPort, MockUserRepo, RepoError};
    use chrono::{TimeZone, Utc};

    fn test_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(Utc.timestamp_opt(1_700_000_000, 0).single().expect("valid ts")))
    }

    fn test_draft() -> SignupDraft {
        SignupDraft {
            name: "Alice".to_string(),
            email: "A@X.com".to_string(),
            password: "secret123".to_string(),
            image_url: None,
        }
    }

    fn existing_user() -> User {
        User::new(
            "Someone",
            EmailAddress::new("a@x.com").expect("valid email"),
            "$argon2id$stub",
            Utc.timestamp_opt(1_600_000_000, 0).single().expect("valid ts"),
        )
    }

    #[tokio::test]
    async fn when_email_taken_returns_error_without_saving() {
        let mut users = MockUserRepo::new();
        users
            .expect_get_by_email()
            .withf(|email| email.as_str() == "a@x.com")
            .returning(|_| Ok(Some(existing_user())));

        // No hash/save expectations: either call would panic.
        let hasher = MockPasswordHasherPort::new();

        let use_case = Signup::new(Arc::new(users), Arc::new(hasher), test_clock());
        let result = use_case.execute(test_draft()).await;

        assert!(matches!(result, Err(UserError::EmailTaken)));
    }

    #[tokio::test]
    async fn when_save_fails_surfaces_signup_failed() {
        let mut users = MockUserRepo::new();
        users.expect_get_by_email().returning(|_| Ok(None));
        users
            .expect_save()
            .returning(|_| Err(RepoError::database("query", "connection reset")));

        let mut hasher = MockPasswordHasherPort::new();
        hasher
            .expect_hash()
            .returning(|_| Ok("$argon2id$fresh".to_string()));

        let use_case = Signup::new(Arc::new(users), Arc::new(hasher), test_clock());
        let result = use_case.execute(test_draft()).await;

        assert!(matches!(result, Err(UserError::SignupFailed(_))));
    }

    #[tokio::test]
    async fn when_valid_input_stores_hashed_credentials() {
        let mut users = MockUserRepo::new();
        users.expect_get_by_email().returning(|_| Ok(None));
        users
            .expect_save()
            .withf(|user| {
                user.email().as_str() == "a@x.com"
                    && user.password_hash() == "$argon2id$fresh"
                    && user.places().is_empty()
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut hasher = MockPasswordHasherPort::new();
        hasher
            .expect_hash()
            .withf(|password| password == "secret123")
            .returning(|_| Ok("$argon2id$fresh".to_string()));

        let use_case = Signup::new(Arc::new(users), Arc::new(hasher), test_clock());
        let user = use_case.execute(test_draft()).await.expect("signup succeeds");

        // The raw password never reaches the stored record.
        assert_eq!(user.password_hash(), "$argon2id$fresh");
        assert_eq!(user.name(), "Alice");
    }
}
