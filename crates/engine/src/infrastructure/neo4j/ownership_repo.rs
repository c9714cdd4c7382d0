//! Neo4j ownership repository - the atomic two-write protocol.
//!
//! A place node and its owner's `place_ids` list live in independently
//! addressable node sets with no native cross-node constraint. Every
//! mutation that touches both sides is staged here on a single
//! [`WriteScope`], so a reader can never observe a place without its owner
//! back-reference or a back-reference pointing at a removed place.

use async_trait::async_trait;
use neo4rs::{query, Graph};
use placely_domain::Place;

use super::scope::WriteScope;
use crate::infrastructure::ports::{PlaceOwnershipRepo, RepoError};

pub struct Neo4jPlaceOwnershipRepo {
    graph: Graph,
}

impl Neo4jPlaceOwnershipRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// Stage both creation writes on the scope.
    ///
    /// Write (a): create the place node and the OWNS edge. The MATCH on the
    /// owner means a vanished owner yields no row and aborts the scope.
    /// Write (b): append the place id to the owner's back-reference list.
    /// The append happens server-side so no stale client copy of the list
    /// is ever written back.
    async fn stage_create(&self, scope: &mut WriteScope, place: &Place) -> Result<(), RepoError> {
        let create_place = query(
            "MATCH (u:User {id: $creator_id})
            CREATE (p:Place {
                id: $id,
                title: $title,
                description: $description,
                address: $address,
                latitude: $latitude,
                longitude: $longitude,
                image_url: $image_url,
                creator_id: $creator_id,
                created_at: $created_at
            })
            CREATE (u)-[:OWNS]->(p)
            RETURN p.id AS id",
        )
        .param("id", place.id.to_string())
        .param("title", place.title.as_str())
        .param("description", place.description.clone())
        .param("address", place.address.clone())
        .param("latitude", place.location.latitude)
        .param("longitude", place.location.longitude)
        .param(
            "image_url",
            place.image_url.clone().unwrap_or_default(),
        )
        .param("creator_id", place.creator.to_string())
        .param("created_at", place.created_at.to_rfc3339());

        scope
            .run_expecting_row(create_place, "User", &place.creator.to_string())
            .await?;

        let append_backref = query(
            "MATCH (u:User {id: $creator_id})
            SET u.place_ids = coalesce(u.place_ids, []) + $place_id
            RETURN u.id AS id",
        )
        .param("creator_id", place.creator.to_string())
        .param("place_id", place.id.to_string());

        scope
            .run_expecting_row(append_backref, "User", &place.creator.to_string())
            .await
    }

    /// Stage both deletion writes on the scope.
    ///
    /// Write (a): rewrite the owner's back-reference list without this
    /// place's id. Write (b): remove the place node (and its OWNS edge).
    async fn stage_delete(&self, scope: &mut WriteScope, place: &Place) -> Result<(), RepoError> {
        let remove_backref = query(
            "MATCH (u:User {id: $creator_id})
            SET u.place_ids = [pid IN coalesce(u.place_ids, []) WHERE pid <> $place_id]
            RETURN u.id AS id",
        )
        .param("creator_id", place.creator.to_string())
        .param("place_id", place.id.to_string());

        scope
            .run_expecting_row(remove_backref, "User", &place.creator.to_string())
            .await?;

        let delete_place = query(
            "MATCH (p:Place {id: $place_id})
            WITH p, p.id AS id
            DETACH DELETE p
            RETURN id",
        )
        .param("place_id", place.id.to_string());

        scope
            .run_expecting_row(delete_place, "Place", &place.id.to_string())
            .await
    }
}

#[async_trait]
impl PlaceOwnershipRepo for Neo4jPlaceOwnershipRepo {
    async fn create_owned(&self, place: &Place) -> Result<(), RepoError> {
        let mut scope = WriteScope::begin(&self.graph).await?;

        if let Err(e) = self.stage_create(&mut scope, place).await {
            if let Err(abort_err) = scope.abort().await {
                tracing::warn!(error = %abort_err, "Rollback failed after aborted place creation");
            }
            return Err(e);
        }

        scope.commit().await?;
        tracing::debug!(
            place_id = %place.id,
            owner_id = %place.creator,
            "Created place and owner back-reference"
        );
        Ok(())
    }

    async fn delete_owned(&self, place: &Place) -> Result<(), RepoError> {
        let mut scope = WriteScope::begin(&self.graph).await?;

        if let Err(e) = self.stage_delete(&mut scope, place).await {
            if let Err(abort_err) = scope.abort().await {
                tracing::warn!(error = %abort_err, "Rollback failed after aborted place deletion");
            }
            return Err(e);
        }

        scope.commit().await?;
        tracing::debug!(
            place_id = %place.id,
            owner_id = %place.creator,
            "Deleted place and owner back-reference"
        );
        Ok(())
    }
}
