//! Neo4j place repository implementation.
//!
//! Single-node reads and writes only. Anything that must keep a place and
//! its owner's back-reference list consistent goes through the ownership
//! repository instead.

use async_trait::async_trait;
use neo4rs::{query, Graph, Node, Row};
use placely_domain::{GeoPoint, Place, PlaceId, PlaceTitle, UserId};

use super::helpers::{parse_typed_id, NodeExt};
use crate::infrastructure::ports::{PlaceRepo, RepoError};

pub struct Neo4jPlaceRepo {
    graph: Graph,
}

impl Neo4jPlaceRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl PlaceRepo for Neo4jPlaceRepo {
    /// Get a place by ID
    async fn get(&self, id: PlaceId) -> Result<Option<Place>, RepoError> {
        let q = query("MATCH (p:Place {id: $id}) RETURN p").param("id", id.to_string());

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
            Ok(Some(row_to_place(row)?))
        } else {
            Ok(None)
        }
    }

    /// List all places owned by a user
    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Place>, RepoError> {
        let q = query(
            "MATCH (u:User {id: $owner_id})-[:OWNS]->(p:Place)
            RETURN p
            ORDER BY p.created_at",
        )
        .param("owner_id", owner_id.to_string());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("query", e))?;
        let mut places = Vec::new();

        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database("query", e))?
        {
            places.push(row_to_place(row)?);
        }

        Ok(places)
    }

    /// Overwrite the mutable fields of a place
    async fn update(&self, place: &Place) -> Result<(), RepoError> {
        let q = query(
            "MATCH (p:Place {id: $id})
            SET p.title = $title,
                p.description = $description
            RETURN p.id AS id",
        )
        .param("id", place.id.to_string())
        .param("title", place.title.as_str())
        .param("description", place.description.clone());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("query", e))?;

        if result
            .next()
            .await
            .map_err(|e| RepoError::database("query", e))?
            .is_none()
        {
            return Err(RepoError::not_found("Place", place.id));
        }

        tracing::debug!(place_id = %place.id, "Updated place");
        Ok(())
    }
}

// =============================================================================
// Row conversion helpers
// =============================================================================

fn row_to_place(row: Row) -> Result<Place, RepoError> {
    let node: Node = row.get("p").map_err(|e| RepoError::database("query", e))?;

    let id: PlaceId = parse_typed_id(&node, "id")?;
    let creator: UserId = parse_typed_id(&node, "creator_id")?;
    let title = PlaceTitle::new(node.get_string_strict("title")?)
        .map_err(|e| RepoError::Serialization(e.to_string()))?;
    let description = node.get_string_strict("description")?;
    let address = node.get_string_strict("address")?;
    let location = GeoPoint::new(
        node.get_f64_strict("latitude")?,
        node.get_f64_strict("longitude")?,
    )
    .map_err(|e| RepoError::Serialization(e.to_string()))?;
    let image_url = node.get_optional_string("image_url");
    let created_at = node.get_datetime_strict("created_at")?;

    Ok(
        Place::new(title, description, address, location, creator, created_at)
            .with_id(id)
            .with_image_url(image_url),
    )
}
