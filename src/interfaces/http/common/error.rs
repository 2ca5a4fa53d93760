//! DomainError → HTTP response mapping

use axum::http::StatusCode;
use axum::Json;
use tracing::error;

use super::ApiResponse;
use crate::domain::{DomainError, ErrorCode};

/// Error half of every handler's `Result`
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorCode::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorCode::PermissionDenied => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::FailedPrecondition => StatusCode::PRECONDITION_FAILED,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a domain failure to its status and envelope. Internal details are
/// logged here and replaced by a generic message.
pub fn domain_error_response(e: DomainError) -> ApiError {
    let code = e.code();
    if code == ErrorCode::Internal {
        error!(error = %e, "Request failed");
    }
    (
        status_for(code),
        Json(ApiResponse::error(code, e.public_message())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_map_to_statuses() {
        let (status, body) = domain_error_response(DomainError::Forbidden("no".into()));
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.0.code.as_deref(), Some("permission-denied"));

        let (status, body) = domain_error_response(DomainError::Internal("db exploded".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error.as_deref(), Some("Internal server error"));

        let (status, _) = domain_error_response(DomainError::FailedPrecondition("x".into()));
        assert_eq!(status, StatusCode::PRECONDITION_FAILED);
    }
}
