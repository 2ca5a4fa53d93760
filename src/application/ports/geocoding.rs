//! Outbound port for the third-party geocoding provider

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::DomainResult;

/// Status reported by the provider for one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderStatus {
    Ok,
    ZeroResults,
    InvalidRequest,
    /// OVER_QUERY_LIMIT, REQUEST_DENIED, UNKNOWN_ERROR, ...
    Other(String),
}

impl ProviderStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "INVALID_REQUEST" => Self::InvalidRequest,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One candidate location
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct GeocodedPlace {
    pub formatted_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub place_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReply {
    pub status: ProviderStatus,
    pub results: Vec<GeocodedPlace>,
    pub error_message: Option<String>,
}

/// Performs the outbound lookup. Transport and decode failures are `Internal`.
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    async fn lookup(&self, address: &str, api_key: &str) -> DomainResult<ProviderReply>;
}
