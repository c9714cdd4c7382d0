extern crate self as placely_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Place, User};
pub use error::DomainError;
pub use ids::{PlaceId, UserId};
pub use value_objects::{EmailAddress, GeoPoint, PlaceTitle};
