//! Authentication middleware for Axum
//!
//! Two gates: bearer ID tokens for user-facing endpoints, and a shared
//! secret header for calls made by the identity provider and the scheduler.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;
use tracing::debug;

use super::common::ApiResponse;
use crate::application::Caller;
use crate::domain::ErrorCode;
use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenClaims};

/// Header carrying the hook secret
pub const HOOK_SECRET_HEADER: &str = "x-hook-secret";

/// Authentication error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    ExpiredToken,
    InvalidHookSecret,
}

/// Authentication state containing the token config
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Authenticated user taken from a verified ID token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub uid: String,
    pub email: Option<String>,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: TokenClaims) -> Self {
        Self {
            uid: claims.sub,
            email: claims.email,
        }
    }

    pub fn caller(&self) -> Caller {
        Caller {
            uid: self.uid.clone(),
            email: self.email.clone(),
        }
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Bearer token authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response(AuthError::MissingToken);
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response(AuthError::InvalidToken);
    };

    match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => {
            if claims.is_expired() {
                return auth_error_response(AuthError::ExpiredToken);
            }
            let user = AuthenticatedUser::from_claims(claims);
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            debug!(error = %e, "Rejected ID token");
            auth_error_response(AuthError::InvalidToken)
        }
    }
}

/// Shared secret expected from hook callers
#[derive(Clone)]
pub struct HookState {
    pub secret: String,
}

/// Accepts the request only when `X-Hook-Secret` matches the configured
/// secret. An empty configured secret disables the hooks entirely.
pub async fn hook_secret_middleware(
    State(hook_state): State<HookState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if hook_state.secret.is_empty() {
        return auth_error_response(AuthError::InvalidHookSecret);
    }

    let presented = request
        .headers()
        .get(HOOK_SECRET_HEADER)
        .map(|h| h.as_bytes());

    match presented {
        Some(value) if secrets_match(value, hook_state.secret.as_bytes()) => {
            next.run(request).await
        }
        _ => auth_error_response(AuthError::InvalidHookSecret),
    }
}

/// Constant-time comparison; slices of different length never match.
fn secrets_match(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

fn auth_error_response(error: AuthError) -> Response {
    let message = match error {
        AuthError::MissingToken => "Missing authentication token",
        AuthError::InvalidToken => "Invalid authentication token",
        AuthError::ExpiredToken => "Token has expired",
        AuthError::InvalidHookSecret => "Invalid hook secret",
    };

    let body = Json(ApiResponse::<()>::error(ErrorCode::Unauthenticated, message));
    (StatusCode::UNAUTHORIZED, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(extract_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_token("Bearer   "), None);
        assert_eq!(extract_token("Token abc"), None);
    }

    #[test]
    fn secret_comparison() {
        assert!(secrets_match(b"s3cret", b"s3cret"));
        assert!(!secrets_match(b"s3cret", b"s3creT"));
        assert!(!secrets_match(b"s3c", b"s3cret"));
        assert!(!secrets_match(b"", b"s3cret"));
    }
}
