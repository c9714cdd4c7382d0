//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for title fields
const MAX_TITLE_LENGTH: usize = 200;

/// A validated place title (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlaceTitle(String);

impl PlaceTitle {
    /// Create a new validated place title.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The title is empty after trimming
    /// - The title exceeds 200 characters after trimming
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Place title cannot be empty"));
        }
        if trimmed.len() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(format!(
                "Place title cannot exceed {} characters",
                MAX_TITLE_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlaceTitle {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlaceTitle> for String {
    fn from(title: PlaceTitle) -> String {
        title.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_valid_title() {
        let title = PlaceTitle::new("  Empire State Building  ").expect("valid title");
        assert_eq!(title.as_str(), "Empire State Building");
    }

    #[test]
    fn rejects_empty_title() {
        assert!(PlaceTitle::new("").is_err());
        assert!(PlaceTitle::new("   ").is_err());
    }

    #[test]
    fn rejects_overlong_title() {
        let long = "x".repeat(201);
        assert!(PlaceTitle::new(long).is_err());
    }

    #[test]
    fn serde_round_trip() {
        let title = PlaceTitle::new("Cafe").expect("valid title");
        let json = serde_json::to_string(&title).expect("serialize");
        assert_eq!(json, "\"Cafe\"");
        let back: PlaceTitle = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, title);
    }
}
