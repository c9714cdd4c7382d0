//! User use cases.

use std::sync::Arc;

mod error;
mod list_users;
mod login;
mod signup;

pub use error::UserError;
pub use list_users::ListUsers;
pub use login::Login;
pub use signup::{Signup, SignupDraft};

/// Container for user use cases.
pub struct UserUseCases {
    pub signup: Arc<Signup>,
    pub login: Arc<Login>,
    pub list: Arc<ListUsers>,
}

impl UserUseCases {
    pub fn new(signup: Arc<Signup>, login: Arc<Login>, list: Arc<ListUsers>) -> Self {
        Self {
            signup,
            login,
            list,
        }
    }
}
