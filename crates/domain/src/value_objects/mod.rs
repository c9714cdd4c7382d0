//! Value objects - immutable, validated-by-construction domain values.

mod email;
mod geo;
mod names;

pub use email::EmailAddress;
pub use geo::GeoPoint;
pub use names::PlaceTitle;
