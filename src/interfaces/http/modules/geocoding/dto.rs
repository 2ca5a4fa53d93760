//! Geocoding DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::ports::GeocodedPlace;

/// Address is checked by the service so rejected input never leaves the process.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GeocodeRequest {
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GeocodeResponse {
    pub results: Vec<GeocodedPlace>,
}
