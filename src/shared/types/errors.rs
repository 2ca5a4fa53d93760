use thiserror::Error;

/// Failure category surfaced to callers.
///
/// Every handler normalizes its failure into exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Unauthenticated,
    InvalidArgument,
    PermissionDenied,
    NotFound,
    FailedPrecondition,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::InvalidArgument => "invalid-argument",
            Self::PermissionDenied => "permission-denied",
            Self::NotFound => "not-found",
            Self::FailedPrecondition => "failed-precondition",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Precondition failed: {0}")]
    FailedPrecondition(String),

    /// Store, network or any other unclassified failure.
    #[error("Internal: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Unauthenticated(_) => ErrorCode::Unauthenticated,
            Self::Validation(_) => ErrorCode::InvalidArgument,
            Self::Forbidden(_) => ErrorCode::PermissionDenied,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::FailedPrecondition(_) => ErrorCode::FailedPrecondition,
            Self::Internal(_) => ErrorCode::Internal,
        }
    }

    /// Message safe to return to a client. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Unauthenticated(msg)
            | Self::Validation(msg)
            | Self::Forbidden(msg)
            | Self::FailedPrecondition(msg) => msg.clone(),
            Self::NotFound { entity, .. } => format!("{} not found", entity),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Internal(format!("Database error: {}", e))
    }
}
