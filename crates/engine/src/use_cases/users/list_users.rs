//! List users use case.

use std::sync::Arc;

use placely_domain::User;

use crate::infrastructure::ports::UserRepo;

use super::error::UserError;

/// List all users. Credential stripping happens at the API boundary.
pub struct ListUsers {
    users: Arc<dyn UserRepo>,
}

impl ListUsers {
    pub fn new(users: Arc<dyn UserRepo>) -> Self {
        Self { users }
    }

    pub async fn execute(&self) -> Result<Vec<User>, UserError> {
        self.users.list().await.map_err(UserError::ListFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockUserRepo, RepoError};
    use chrono::{TimeZone, Utc};
    use placely_domain::EmailAddress;

    #[tokio::test]
    async fn returns_every_user() {
        let mut users = MockUserRepo::new();
        users.expect_list().returning(|| {
            Ok(vec![
                User::new(
                    "Alice",
                    EmailAddress::new("a@x.com").expect("valid email"),
                    "$argon2id$a",
                    Utc.timestamp_opt(1_600_000_000, 0).single().expect("valid ts"),
                ),
                User::new(
                    "Bob",
                    EmailAddress::new("b@x.com").expect("valid email"),
                    "$argon2id$b",
                    Utc.timestamp_opt(1_600_000_100, 0).single().expect("valid ts"),
                ),
            ])
        });

        let use_case = ListUsers::new(Arc::new(users));
        let result = use_case.execute().await.expect("listing succeeds");
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn when_store_fails_surfaces_list_failed() {
        let mut users = MockUserRepo::new();
        users
            .expect_list()
            .returning(|| Err(RepoError::unavailable("connection refused")));

        let use_case = ListUsers::new(Arc::new(users));
        let result = use_case.execute().await;

        assert!(matches!(result, Err(UserError::ListFailed(_))));
    }
}
