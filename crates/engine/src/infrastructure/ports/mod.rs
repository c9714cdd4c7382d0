//! Port traits decoupling use cases from infrastructure.

mod error;
mod external;
mod repos;
mod testing;

pub use error::{CredentialError, GeocodeError, RepoError};
pub use external::*;
pub use repos::*;
pub use testing::*;
