use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::application::GeocodingService;
use crate::connector::adapter::http::{read_success_body, transport_error};
use crate::connector::adapter::ApiConfig;
use crate::domain::{Coordinate, LookupError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Subset of the geocoding response we care about. `status` and
/// `error_message` carry provider-level failures that arrive with HTTP 200.
#[derive(Deserialize)]
struct GeoResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeoResult>,
}

#[derive(Deserialize)]
struct GeoResult {
    geometry: Option<Geometry>,
    formatted_address: Option<String>,
}

#[derive(Deserialize)]
struct Geometry {
    location: Option<Location>,
}

#[derive(Deserialize)]
struct Location {
    lat: Option<f64>,
    lng: Option<f64>,
}

/// HTTP client for the Google Geocoding API (and compatible endpoints).
///
/// Implements [`GeocodingService`] so use cases stay decoupled from transport
/// and serialization details. The provider may return several candidate
/// matches per query; only `results[0]` — the top-ranked match — is ever
/// used.
pub struct GoogleGeocodingClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl GoogleGeocodingClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: config.api_key().to_string(),
            url: config.geocoding_url().to_string(),
        }
    }

    async fn fetch(&self, query: &[(&str, &str)]) -> Result<String, LookupError> {
        let response = self
            .client
            .get(&self.url)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;

        read_success_body(response).await
    }

    /// Lifts provider-level statuses delivered with HTTP 200 into the error
    /// taxonomy before any field extraction happens.
    fn check_provider_status(response: &GeoResponse) -> Result<(), LookupError> {
        let detail = || response.error_message.clone().unwrap_or_default();
        match response.status.as_deref() {
            Some("ZERO_RESULTS") => Err(LookupError::not_found("geocoder matched no results")),
            Some("OVER_QUERY_LIMIT") => Err(LookupError::rate_limited(format!(
                "geocoder quota exceeded: {}",
                detail()
            ))),
            Some("REQUEST_DENIED") => Err(LookupError::auth(format!(
                "geocoder rejected the request: {}",
                detail()
            ))),
            _ => Ok(()),
        }
    }

    fn first_result(body: &str) -> Result<GeoResult, LookupError> {
        let response: GeoResponse = serde_json::from_str(body).map_err(|e| {
            LookupError::malformed(format!("failed to deserialize geocoding response: {e}"))
        })?;

        Self::check_provider_status(&response)?;

        response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::not_found("geocoder returned an empty results array"))
    }

    fn parse_coordinates(body: &str) -> Result<Coordinate, LookupError> {
        let result = Self::first_result(body)?;

        let location = result
            .geometry
            .and_then(|g| g.location)
            .ok_or_else(|| LookupError::malformed("results[0] carries no geometry.location"))?;

        match (location.lat, location.lng) {
            (Some(lat), Some(lng)) => Ok(Coordinate::new(lat, lng)),
            _ => Err(LookupError::malformed(
                "geometry.location is missing lat or lng",
            )),
        }
    }

    fn parse_formatted_address(body: &str) -> Result<String, LookupError> {
        let result = Self::first_result(body)?;

        result
            .formatted_address
            .ok_or_else(|| LookupError::malformed("results[0] carries no formatted_address"))
    }
}

#[async_trait]
impl GeocodingService for GoogleGeocodingClient {
    async fn resolve_coordinates(&self, address: &str) -> Result<Coordinate, LookupError> {
        debug!("Geocoding address: {}", address);

        let body = self
            .fetch(&[("address", address), ("key", &self.api_key)])
            .await?;

        Self::parse_coordinates(&body)
    }

    async fn resolve_address(&self, coordinate: &Coordinate) -> Result<String, LookupError> {
        debug!("Reverse geocoding: {}", coordinate);

        let latlng = coordinate.as_latlng_param();
        let body = self
            .fetch(&[("latlng", latlng.as_str()), ("key", &self.api_key)])
            .await?;

        Self::parse_formatted_address(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coordinates_takes_first_result() {
        let body = r#"{
            "status": "OK",
            "results": [
                {"geometry": {"location": {"lat": 37.8719, "lng": -122.2585}}},
                {"geometry": {"location": {"lat": 40.7128, "lng": -74.0060}}}
            ]
        }"#;

        let coord = GoogleGeocodingClient::parse_coordinates(body).unwrap();

        assert_eq!(coord.latitude(), 37.8719);
        assert_eq!(coord.longitude(), -122.2585);
    }

    #[test]
    fn parse_coordinates_preserves_full_precision() {
        let body = r#"{"results": [{"geometry": {"location": {"lat": 30.5866223, "lng": -96.3291549}}}]}"#;

        let coord = GoogleGeocodingClient::parse_coordinates(body).unwrap();

        assert_eq!(coord.latitude(), 30.5866223);
        assert_eq!(coord.longitude(), -96.3291549);
    }

    #[test]
    fn parse_coordinates_empty_results_is_not_found() {
        let body = r#"{"status": "OK", "results": []}"#;

        let err = GoogleGeocodingClient::parse_coordinates(body).unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn parse_coordinates_zero_results_status_is_not_found() {
        let body = r#"{"status": "ZERO_RESULTS", "results": []}"#;

        let err = GoogleGeocodingClient::parse_coordinates(body).unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn parse_coordinates_missing_location_is_malformed() {
        let body = r#"{"results": [{"geometry": {}}]}"#;

        let err = GoogleGeocodingClient::parse_coordinates(body).unwrap_err();

        assert!(err.is_malformed());
    }

    #[test]
    fn parse_coordinates_non_numeric_lat_is_malformed() {
        let body = r#"{"results": [{"geometry": {"location": {"lat": "37.8", "lng": -122.2}}}]}"#;

        let err = GoogleGeocodingClient::parse_coordinates(body).unwrap_err();

        assert!(err.is_malformed());
    }

    #[test]
    fn request_denied_status_is_auth_error() {
        let body = r#"{"status": "REQUEST_DENIED", "error_message": "API key invalid", "results": []}"#;

        let err = GoogleGeocodingClient::parse_coordinates(body).unwrap_err();

        assert!(matches!(err, LookupError::Auth(_)));
    }

    #[test]
    fn over_query_limit_status_is_rate_limited() {
        let body = r#"{"status": "OVER_QUERY_LIMIT", "results": []}"#;

        let err = GoogleGeocodingClient::parse_coordinates(body).unwrap_err();

        assert!(matches!(err, LookupError::RateLimited(_)));
    }

    #[test]
    fn parse_formatted_address_takes_first_result() {
        let body = r#"{
            "results": [
                {"formatted_address": "2530 Ridge Rd, Berkeley, CA 94709, USA"},
                {"formatted_address": "Berkeley, CA, USA"}
            ]
        }"#;

        let address = GoogleGeocodingClient::parse_formatted_address(body).unwrap();

        assert_eq!(address, "2530 Ridge Rd, Berkeley, CA 94709, USA");
    }

    #[test]
    fn parse_formatted_address_missing_field_is_malformed() {
        let body = r#"{"results": [{"geometry": {"location": {"lat": 1.0, "lng": 2.0}}}]}"#;

        let err = GoogleGeocodingClient::parse_formatted_address(body).unwrap_err();

        assert!(err.is_malformed());
    }
}
