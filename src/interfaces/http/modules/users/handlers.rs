//! User management API handlers
//!
//! Root-only endpoints. Delegates to `UserService` from the
//! application/identity layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::dto::{ChangeRoleRequest, ListUsersParams, RoleChangeDto, UserDto};
use crate::application::UserService;
use crate::interfaces::http::common::{
    domain_error_response, ApiError, ApiQuery, ApiResponse, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/users/role",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = ChangeRoleRequest,
    responses(
        (status = 200, description = "Role changed", body = ApiResponse<RoleChangeDto>),
        (status = 400, description = "Invalid role or uid"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Caller is not root, or root demoting itself"),
        (status = 404, description = "User not found")
    )
)]
pub async fn change_user_role(
    State(state): State<UserHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<RoleChangeDto>>, ApiError> {
    let change = state
        .user_service
        .change_user_role(&user.caller(), &request.uid, &request.new_role)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(RoleChangeDto::from(change))))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{uid}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("uid" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 403, description = "Caller is not root"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(uid): Path<String>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let found = state
        .user_service
        .get_user_info(&user.caller(), &uid)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(UserDto::from(found))))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(ListUsersParams),
    responses(
        (status = 200, description = "User list", body = ApiResponse<PaginatedResponse<UserDto>>),
        (status = 400, description = "Unknown role filter or malformed query"),
        (status = 403, description = "Caller is not root")
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiQuery(params): ApiQuery<ListUsersParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<UserDto>>>, ApiError> {
    let result = state
        .user_service
        .list_users(&user.caller(), params.into())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        result,
    ))))
}
