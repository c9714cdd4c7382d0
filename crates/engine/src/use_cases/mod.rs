//! Use cases - user story orchestration across entities.

pub mod places;
pub mod users;

pub use places::{PlaceDraft, PlaceError, PlaceUseCases};
pub use users::{SignupDraft, UserError, UserUseCases};
