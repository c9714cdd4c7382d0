//! Google Geocoding API client.

use async_trait::async_trait;
use placely_domain::GeoPoint;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::infrastructure::ports::{GeocodeError, GeocodePort};

/// Client for the Google Geocoding API.
#[derive(Clone)]
pub struct GoogleGeocodeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Default geocoding base URL.
pub const DEFAULT_GEOCODE_BASE_URL: &str = "https://maps.googleapis.com";

impl GoogleGeocodeClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create client from environment variables.
    ///
    /// Uses `GEOCODE_BASE_URL` and `GOOGLE_MAPS_API_KEY`, falling back to
    /// the public endpoint and an empty key if not set.
    pub fn from_env() -> Self {
        let base_url = std::env::var("GEOCODE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEOCODE_BASE_URL.to_string());
        let api_key = std::env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default();
        Self::new(&base_url, &api_key)
    }
}

#[async_trait]
impl GeocodePort for GoogleGeocodeClient {
    async fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        let response = self
            .client
            .get(format!("{}/maps/api/geocode/json", self.base_url))
            .query(&[("address", address), ("key", &self.api_key)])
            .send()
            .await
            .map_err(|e| GeocodeError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeocodeError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

        point_from_response(body)
    }
}

// =============================================================================
// API response types
// =============================================================================

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

fn point_from_response(response: GeocodeResponse) -> Result<GeoPoint, GeocodeError> {
    match response.status.as_str() {
        "OK" => {
            let location = response
                .results
                .into_iter()
                .next()
                .map(|r| r.geometry.location)
                .ok_or_else(|| {
                    GeocodeError::InvalidResponse("status OK but no results".to_string())
                })?;
            GeoPoint::new(location.lat, location.lng)
                .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))
        }
        "ZERO_RESULTS" => Err(GeocodeError::NoMatch),
        status => Err(GeocodeError::RequestFailed(format!(
            "{}: {}",
            status,
            response.error_message.unwrap_or_default()
        ))),
    }
}
