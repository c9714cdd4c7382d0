//! Geographic coordinate pair.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A latitude/longitude pair in decimal degrees.
///
/// Serialized as `{"lat": .., "lng": ..}` to match the wire format expected
/// by map clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a coordinate pair, checking decimal-degree ranges.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when latitude is outside [-90, 90]
    /// or longitude is outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::validation(format!(
                "Latitude {} is out of range",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::validation(format!(
                "Longitude {} is out of range",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}
