//! External service port traits (geocoding, password hashing).

use async_trait::async_trait;
use placely_domain::GeoPoint;

use super::error::{CredentialError, GeocodeError};

/// Resolves a postal address to geographic coordinates.
///
/// A failure here is fatal to the enclosing operation: callers must not
/// persist anything when no coordinates can be resolved.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeocodePort: Send + Sync {
    async fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodeError>;
}

/// Hashes and verifies login credentials.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasherPort: Send + Sync {
    /// Produce a self-describing hash string (PHC format) with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, CredentialError>;

    /// Verify a candidate password against a stored hash. A malformed
    /// stored hash verifies as `false`, never as an error.
    fn verify(&self, password: &str, stored_hash: &str) -> bool;
}
