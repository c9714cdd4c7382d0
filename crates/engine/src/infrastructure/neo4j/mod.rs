//! Neo4j database implementations.

use neo4rs::Graph;
use std::sync::Arc;

mod helpers;
mod scope;

mod ownership_repo;
mod place_repo;
mod schema;
mod user_repo;

pub use ownership_repo::Neo4jPlaceOwnershipRepo;
pub use place_repo::Neo4jPlaceRepo;
pub use schema::ensure_schema;
pub use scope::WriteScope;
pub use user_repo::Neo4jUserRepo;

/// Create all Neo4j repositories from a graph connection.
pub struct Neo4jRepositories {
    pub users: Arc<Neo4jUserRepo>,
    pub places: Arc<Neo4jPlaceRepo>,
    pub ownership: Arc<Neo4jPlaceOwnershipRepo>,
}

impl Neo4jRepositories {
    pub fn new(graph: Graph) -> Self {
        Self {
            users: Arc::new(Neo4jUserRepo::new(graph.clone())),
            places: Arc::new(Neo4jPlaceRepo::new(graph.clone())),
            ownership: Arc::new(Neo4jPlaceOwnershipRepo::new(graph)),
        }
    }
}
