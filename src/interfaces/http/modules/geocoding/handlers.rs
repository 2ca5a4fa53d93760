//! Geocoding proxy handler

use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use super::dto::{GeocodeRequest, GeocodeResponse};
use crate::application::GeocodingService;
use crate::interfaces::http::common::{
    domain_error_response, ApiError, ApiResponse, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct GeocodingHandlerState {
    pub geocoding_service: Arc<GeocodingService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/geocode",
    tag = "Geocoding",
    security(("bearer_auth" = [])),
    request_body = GeocodeRequest,
    responses(
        (status = 200, description = "Matching places", body = ApiResponse<GeocodeResponse>),
        (status = 400, description = "Invalid address"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "No results for the address"),
        (status = 412, description = "Geocoding is not configured"),
        (status = 500, description = "Provider failure")
    )
)]
pub async fn geocode(
    State(state): State<GeocodingHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<GeocodeRequest>,
) -> Result<Json<ApiResponse<GeocodeResponse>>, ApiError> {
    let results = state
        .geocoding_service
        .geocode(&user.caller(), &request.address)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(GeocodeResponse { results })))
}
