//! Google Geocoding API client

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

use crate::application::ports::{GeocodedPlace, GeocodingClient, ProviderReply, ProviderStatus};
use crate::domain::{DomainError, DomainResult};

pub const DEFAULT_GEOCODING_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

pub struct GoogleGeocodingClient {
    http: reqwest::Client,
    base_url: String,
}

impl GoogleGeocodingClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> DomainResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

// ── Wire format ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
    #[serde(default)]
    place_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<GeocodeResponse> for ProviderReply {
    fn from(r: GeocodeResponse) -> Self {
        Self {
            status: ProviderStatus::parse(&r.status),
            results: r
                .results
                .into_iter()
                .map(|g| GeocodedPlace {
                    formatted_address: g.formatted_address,
                    latitude: g.geometry.location.lat,
                    longitude: g.geometry.location.lng,
                    place_id: g.place_id,
                })
                .collect(),
            error_message: r.error_message,
        }
    }
}

#[async_trait]
impl GeocodingClient for GoogleGeocodingClient {
    async fn lookup(&self, address: &str, api_key: &str) -> DomainResult<ProviderReply> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("address", address), ("key", api_key)])
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key.
                let e = e.without_url();
                error!(error = %e, "Geocoding request failed");
                DomainError::Internal(format!("Geocoding request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, "Geocoding provider returned HTTP error");
            return Err(DomainError::Internal(format!(
                "Geocoding provider returned HTTP {}",
                status
            )));
        }

        let body: GeocodeResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            error!(error = %e, "Geocoding response could not be decoded");
            DomainError::Internal(format!("Invalid geocoding response: {}", e))
        })?;

        debug!(status = %body.status, results = body.results.len(), "Geocoding reply");
        Ok(body.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_payload() {
        let json = r#"{
            "results": [{
                "formatted_address": "12 Main St, Springfield",
                "geometry": { "location": { "lat": 39.78, "lng": -89.65 }, "location_type": "ROOFTOP" },
                "place_id": "ChIJ123",
                "types": ["street_address"]
            }],
            "status": "OK"
        }"#;

        let reply: ProviderReply = serde_json::from_str::<GeocodeResponse>(json).unwrap().into();
        assert_eq!(reply.status, ProviderStatus::Ok);
        assert_eq!(reply.results.len(), 1);
        assert_eq!(reply.results[0].latitude, 39.78);
        assert_eq!(reply.results[0].place_id.as_deref(), Some("ChIJ123"));
    }

    #[test]
    fn decodes_error_payload_without_results() {
        let json = r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid." }"#;
        let reply: ProviderReply = serde_json::from_str::<GeocodeResponse>(json).unwrap().into();
        assert_eq!(reply.status, ProviderStatus::Other("REQUEST_DENIED".into()));
        assert!(reply.results.is_empty());
        assert!(reply.error_message.is_some());
    }

    #[tokio::test]
    async fn unreachable_provider_is_internal() {
        let client = GoogleGeocodingClient::new("http://127.0.0.1:9/geocode/json", 1).unwrap();
        let err = client.lookup("12 Main St", "SECRET-KEY").await.unwrap_err();
        match err {
            DomainError::Internal(msg) => {
                assert!(msg.starts_with("Geocoding request failed"));
                assert!(!msg.contains("SECRET-KEY"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
