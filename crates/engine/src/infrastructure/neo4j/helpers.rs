//! Neo4j deserialization helpers for row conversion functions.

use chrono::{DateTime, Utc};
use neo4rs::Node;
use uuid::Uuid;

use crate::infrastructure::ports::RepoError;

/// Get a required UUID field and parse it into a typed id.
pub fn parse_typed_id<T: From<Uuid>>(node: &Node, field: &'static str) -> Result<T, RepoError> {
    let raw: String = node
        .get(field)
        .map_err(|e| RepoError::database(field, e))?;
    let uuid = Uuid::parse_str(&raw)
        .map_err(|e| RepoError::Serialization(format!("Invalid UUID in field '{field}': {e}")))?;
    Ok(T::from(uuid))
}

/// Parse a list property of UUID strings into typed ids.
///
/// A missing property reads as an empty list; a malformed entry is an error,
/// not a silent skip, because the back-reference list feeds the ownership
/// invariant.
pub fn parse_typed_id_list<T: From<Uuid>>(
    node: &Node,
    field: &'static str,
) -> Result<Vec<T>, RepoError> {
    let raw: Vec<String> = node.get(field).unwrap_or_default();
    raw.iter()
        .map(|s| {
            Uuid::parse_str(s)
                .map(T::from)
                .map_err(|e| RepoError::Serialization(format!("Invalid UUID in '{field}': {e}")))
        })
        .collect()
}

/// Extension trait for Neo4j Node to simplify common deserialization patterns.
pub trait NodeExt {
    /// Get a required string field with strict error handling.
    fn get_string_strict(&self, field: &'static str) -> Result<String, RepoError>;

    /// Get an optional string field, returning None if empty or missing.
    fn get_optional_string(&self, field: &str) -> Option<String>;

    /// Get a required RFC 3339 timestamp field.
    fn get_datetime_strict(&self, field: &'static str) -> Result<DateTime<Utc>, RepoError>;

    /// Get a required float field.
    fn get_f64_strict(&self, field: &'static str) -> Result<f64, RepoError>;
}

impl NodeExt for Node {
    fn get_string_strict(&self, field: &'static str) -> Result<String, RepoError> {
        self.get(field).map_err(|e| RepoError::database(field, e))
    }

    fn get_optional_string(&self, field: &str) -> Option<String> {
        self.get::<String>(field)
            .ok()
            .filter(|s| !s.is_empty())
    }

    fn get_datetime_strict(&self, field: &'static str) -> Result<DateTime<Utc>, RepoError> {
        let raw: String = self.get(field).map_err(|e| RepoError::database(field, e))?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                RepoError::Serialization(format!("Invalid timestamp in field '{field}': {e}"))
            })
    }

    fn get_f64_strict(&self, field: &'static str) -> Result<f64, RepoError> {
        self.get(field).map_err(|e| RepoError::database(field, e))
    }
}
