//! Normalized email address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A normalized email address (trimmed, lower-cased, structurally checked).
///
/// Full syntactic validation happens at the request boundary; this type
/// guarantees that every address reaching the datastore is in its canonical
/// form so the uniqueness constraint on `email` is case-insensitive in effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a normalized email address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the address has no local part,
    /// no domain, or no `@` separator.
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let normalized = address.into().trim().to_ascii_lowercase();
        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(DomainError::validation("Email address must contain '@'"));
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(DomainError::validation("Email address is malformed"));
        }
        Ok(Self(normalized))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> String {
        email.0
    }
}
