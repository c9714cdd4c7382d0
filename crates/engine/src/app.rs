//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::neo4j::Neo4jRepositories;
use crate::infrastructure::ports::{
    ClockPort, GeocodePort, PasswordHasherPort, PlaceOwnershipRepo, PlaceRepo, UserRepo,
};
use crate::use_cases::places::{
    CreatePlace, DeletePlace, GetPlace, ListOwnedPlaces, PlaceUseCases, UpdatePlace,
};
use crate::use_cases::users::{ListUsers, Login, Signup, UserUseCases};

/// Main application state.
///
/// Holds all repositories and use cases. Passed to HTTP handlers via Axum
/// state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for all repository ports.
pub struct Repositories {
    pub users: Arc<dyn UserRepo>,
    pub places: Arc<dyn PlaceRepo>,
    pub ownership: Arc<dyn PlaceOwnershipRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub places: PlaceUseCases,
    pub users: UserUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        repos: Neo4jRepositories,
        geocoder: Arc<dyn GeocodePort>,
        hasher: Arc<dyn PasswordHasherPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let users: Arc<dyn UserRepo> = repos.users.clone();
        let places: Arc<dyn PlaceRepo> = repos.places.clone();
        let ownership: Arc<dyn PlaceOwnershipRepo> = repos.ownership.clone();

        let place_use_cases = PlaceUseCases::new(
            Arc::new(CreatePlace::new(
                users.clone(),
                ownership.clone(),
                geocoder,
                clock.clone(),
            )),
            Arc::new(UpdatePlace::new(places.clone())),
            Arc::new(DeletePlace::new(places.clone(), ownership.clone())),
            Arc::new(GetPlace::new(places.clone())),
            Arc::new(ListOwnedPlaces::new(users.clone(), places.clone())),
        );

        let user_use_cases = UserUseCases::new(
            Arc::new(Signup::new(users.clone(), hasher.clone(), clock)),
            Arc::new(Login::new(users.clone(), hasher)),
            Arc::new(ListUsers::new(users.clone())),
        );

        Self {
            repositories: Repositories {
                users,
                places,
                ownership,
            },
            use_cases: UseCases {
                places: place_use_cases,
                users: user_use_cases,
            },
        }
    }
}
