//! Place use cases.

use std::sync::Arc;

mod create_place;
mod delete_place;
mod error;
mod get_place;
mod list_for_owner;
mod types;
mod update_place;

pub use create_place::CreatePlace;
pub use delete_place::DeletePlace;
pub use error::PlaceError;
pub use get_place::GetPlace;
pub use list_for_owner::ListOwnedPlaces;
pub use types::PlaceDraft;
pub use update_place::UpdatePlace;

/// Container for place use cases.
pub struct PlaceUseCases {
    pub create: Arc<CreatePlace>,
    pub update: Arc<UpdatePlace>,
    pub delete: Arc<DeletePlace>,
    pub get: Arc<GetPlace>,
    pub list_for_owner: Arc<ListOwnedPlaces>,
}

impl PlaceUseCases {
    pub fn new(
        create: Arc<CreatePlace>,
        update: Arc<UpdatePlace>,
        delete: Arc<DeletePlace>,
        get: Arc<GetPlace>,
        list_for_owner: Arc<ListOwnedPlaces>,
    ) -> Self {
        Self {
            create,
            update,
            delete,
            get,
            list_for_owner,
        }
    }
}
