//! Route expiration API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::dto::{ExpiryOutcomeDto, RouteDetailsDto};
use crate::application::RouteService;
use crate::interfaces::http::common::{domain_error_response, ApiError, ApiResponse};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct RouteHandlerState {
    pub route_service: Arc<RouteService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/routes/expire-stale",
    tag = "Routes",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Stale routes closed", body = ApiResponse<ExpiryOutcomeDto>),
        (status = 403, description = "Caller is not root")
    )
)]
pub async fn expire_stale_routes(
    State(state): State<RouteHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<ExpiryOutcomeDto>>, ApiError> {
    let outcome = state
        .route_service
        .expire_stale_routes_as(&user.caller())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(outcome.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/routes/{id}/expire",
    tag = "Routes",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Route ID")),
    responses(
        (status = 200, description = "Route closed", body = ApiResponse<ExpiryOutcomeDto>),
        (status = 403, description = "Caller is not root"),
        (status = 404, description = "Route not found"),
        (status = 412, description = "Route already closed")
    )
)]
pub async fn expire_route(
    State(state): State<RouteHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ExpiryOutcomeDto>>, ApiError> {
    let outcome = state
        .route_service
        .expire_route(&user.caller(), &id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(outcome.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/routes/{id}",
    tag = "Routes",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Route ID")),
    responses(
        (status = 200, description = "Route and assignments", body = ApiResponse<RouteDetailsDto>),
        (status = 403, description = "Not root, or admin of another company"),
        (status = 404, description = "Route not found")
    )
)]
pub async fn get_route(
    State(state): State<RouteHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<RouteDetailsDto>>, ApiError> {
    let details = state
        .route_service
        .get_route(&user.caller(), &id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(details.into())))
}
