//! Neo4j schema initialization - constraints and indexes.

use neo4rs::{query, Graph};

/// Initialize Neo4j schema with required constraints and indexes.
///
/// This should be called once on startup. Constraints are created with
/// IF NOT EXISTS to be idempotent.
pub async fn ensure_schema(graph: &Graph) -> Result<(), neo4rs::Error> {
    graph
        .run(query(
            "CREATE CONSTRAINT user_id_unique IF NOT EXISTS
             FOR (u:User) REQUIRE u.id IS UNIQUE",
        ))
        .await?;

    graph
        .run(query(
            "CREATE CONSTRAINT place_id_unique IF NOT EXISTS
             FOR (p:Place) REQUIRE p.id IS UNIQUE",
        ))
        .await?;

    // Emails are stored normalized (lower-cased), so this uniqueness
    // constraint is case-insensitive in effect.
    graph
        .run(query(
            "CREATE CONSTRAINT user_email_unique IF NOT EXISTS
             FOR (u:User) REQUIRE u.email IS UNIQUE",
        ))
        .await?;

    graph
        .run(query(
            "CREATE INDEX place_creator IF NOT EXISTS
             FOR (p:Place) ON (p.creator_id)",
        ))
        .await?;

    tracing::info!("Neo4j schema initialized (constraints and indexes ensured)");
    Ok(())
}
