//! Worker invitation API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::dto::ReminderReceiptDto;
use crate::application::InvitationService;
use crate::interfaces::http::common::{domain_error_response, ApiError, ApiResponse};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct InvitationHandlerState {
    pub invitation_service: Arc<InvitationService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/invitations/{id}/remind",
    tag = "Invitations",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Invitation ID")),
    responses(
        (status = 200, description = "Reminder queued", body = ApiResponse<ReminderReceiptDto>),
        (status = 403, description = "Not root or admin of the inviting company"),
        (status = 404, description = "Invitation not found"),
        (status = 412, description = "Not pending, or reminded within the last 24 hours")
    )
)]
pub async fn send_reminder(
    State(state): State<InvitationHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ReminderReceiptDto>>, ApiError> {
    let receipt = state
        .invitation_service
        .send_reminder(&user.caller(), &id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(receipt.into())))
}
