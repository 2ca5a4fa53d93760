//! Hook endpoints called by the identity provider and the scheduler.
//! Guarded by `X-Hook-Secret`, not by user tokens.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{ProvisionedUserDto, UserCreatedHook};
use crate::application::{RouteService, UserService};
use crate::interfaces::http::common::{
    domain_error_response, ApiError, ApiResponse, ValidatedJson,
};
use crate::interfaces::http::modules::routes::ExpiryOutcomeDto;

#[derive(Clone)]
pub struct HookHandlerState {
    pub user_service: Arc<UserService>,
    pub route_service: Arc<RouteService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/hooks/user-created",
    tag = "Hooks",
    security(("hook_secret" = [])),
    request_body = UserCreatedHook,
    responses(
        (status = 201, description = "User document created", body = ApiResponse<ProvisionedUserDto>),
        (status = 400, description = "Invalid identity record"),
        (status = 401, description = "Wrong or missing hook secret"),
        (status = 412, description = "User already provisioned")
    )
)]
pub async fn user_created(
    State(state): State<HookHandlerState>,
    ValidatedJson(hook): ValidatedJson<UserCreatedHook>,
) -> Result<(StatusCode, Json<ApiResponse<ProvisionedUserDto>>), ApiError> {
    let provisioned = state
        .user_service
        .on_user_created(hook.into())
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(provisioned.into())),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/hooks/expire-stale-routes",
    tag = "Hooks",
    security(("hook_secret" = [])),
    responses(
        (status = 200, description = "Stale routes closed", body = ApiResponse<ExpiryOutcomeDto>),
        (status = 401, description = "Wrong or missing hook secret")
    )
)]
pub async fn expire_stale_routes(
    State(state): State<HookHandlerState>,
) -> Result<Json<ApiResponse<ExpiryOutcomeDto>>, ApiError> {
    let outcome = state
        .route_service
        .expire_stale_routes()
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(outcome.into())))
}
