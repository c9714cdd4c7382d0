//! Neo4j user repository implementation.

use async_trait::async_trait;
use neo4rs::{query, Graph, Node, Row};
use placely_domain::{EmailAddress, PlaceId, User, UserId};

use super::helpers::{parse_typed_id, parse_typed_id_list, NodeExt};
use crate::infrastructure::ports::{RepoError, UserRepo};

pub struct Neo4jUserRepo {
    graph: Graph,
}

impl Neo4jUserRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl UserRepo for Neo4jUserRepo {
    /// Get a user by ID
    async fn get(&self, id: UserId) -> Result<Option<User>, RepoError> {
        let q = query("MATCH (u:User {id: $id}) RETURN u").param("id", id.to_string());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("query", e))?;

        if let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database("query", e))?
        {
            Ok(Some(row_to_user(row)?))
        } else {
            Ok(None)
        }
    }

    /// Get a user by normalized email address
    async fn get_by_email(&self, email: &EmailAddress) -> Result<Option<User>, RepoError> {
        let q = query("MATCH (u:User {email: $email}) RETURN u")
            .param("email", email.as_str());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("query", e))?;

        if let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database("query", e))?
        {
            Ok(Some(row_to_user(row)?))
        } else {
            Ok(None)
        }
    }

    /// List all users
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let q = query("MATCH (u:User) RETURN u ORDER BY u.created_at");

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("query", e))?;
        let mut users = Vec::new();

        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database("query", e))?
        {
            users.push(row_to_user(row)?);
        }

        Ok(users)
    }

    /// Save a user (upsert)
    async fn save(&self, user: &User) -> Result<(), RepoError> {
        let place_ids: Vec<String> = user.places().iter().map(|id| id.to_string()).collect();

        let q = query(
            "MERGE (u:User {id: $id})
            ON CREATE SET
                u.name = $name,
                u.email = $email,
                u.password_hash = $password_hash,
                u.image_url = $image_url,
                u.place_ids = $place_ids,
                u.created_at = $created_at
            ON MATCH SET
                u.name = $name,
                u.email = $email,
                u.password_hash = $password_hash,
                u.image_url = $image_url,
                u.place_ids = $place_ids",
        )
        .param("id", user.id().to_string())
        .param("name", user.name().to_string())
        .param("email", user.email().as_str())
        .param("password_hash", user.password_hash().to_string())
        .param("image_url", user.image_url().unwrap_or_default().to_string())
        .param("place_ids", place_ids)
        .param("created_at", user.created_at().to_rfc3339());

        self.graph
            .run(q)
            .await
            .map_err(|e| RepoError::database("query", e))?;

        tracing::debug!(user_id = %user.id(), "Saved user");
        Ok(())
    }
}

// =============================================================================
// Row conversion helpers
// =============================================================================

fn row_to_user(row: Row) -> Result<User, RepoError> {
    let node: Node = row.get("u").map_err(|e| RepoError::database("query", e))?;

    let id: UserId = parse_typed_id(&node, "id")?;
    let name = node.get_string_strict("name")?;
    let email = EmailAddress::new(node.get_string_strict("email")?)
        .map_err(|e| RepoError::Serialization(e.to_string()))?;
    let password_hash = node.get_string_strict("password_hash")?;
    let image_url = node.get_optional_string("image_url");
    let places: Vec<PlaceId> = parse_typed_id_list(&node, "place_ids")?;
    let created_at = node.get_datetime_strict("created_at")?;

    Ok(User::new(name, email, password_hash, created_at)
        .with_id(id)
        .with_image_url(image_url)
        .with_places(places))
}
