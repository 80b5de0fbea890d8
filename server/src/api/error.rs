//! API Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::auth::ErrorResponse;
use crate::permissions::PermissionError;

/// Errors returned by console API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The session lacks a required permission.
    #[error("Permission denied: {0}")]
    Permission(#[from] PermissionError),

    /// Request body is well-formed JSON but semantically invalid.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::Permission(_) => (StatusCode::FORBIDDEN, "PERMISSION_DENIED"),
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        };

        let body = Json(ErrorResponse {
            error: code.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_error_is_forbidden() {
        let response =
            ApiError::from(PermissionError::MissingPermission("owner:roles:view".into()))
                .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let response = ApiError::Validation("empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_message_includes_permission() {
        let err = ApiError::from(PermissionError::MissingPermission("brand:team:manage".into()));
        assert_eq!(
            err.to_string(),
            "Permission denied: Missing permission: brand:team:manage"
        );
    }
}
