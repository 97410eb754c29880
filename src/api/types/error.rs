//! API error responses
//!
//! Every failure surfaces as a `{error, message}` pair: a short
//! machine-readable tag plus a human-readable hint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Wire shape of an error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        error: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                error: error.into(),
                message: message.into(),
            },
        }
    }

    /// Missing or invalid request fields
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation error", message)
    }

    /// Authorization header absent or not of the form `Bearer <token>`
    pub fn malformed_auth_header() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "Authorization header missing or malformed",
            "Please provide a valid Bearer token in the Authorization header.",
        )
    }

    /// Token failed signature or expiry checks
    pub fn invalid_token() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "Invalid or expired token",
            "Please log in again to get a fresh token.",
        )
    }

    /// Login failed; identical body for unknown email and wrong password
    pub fn invalid_credentials() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "Invalid credentials",
            "Email or password is incorrect. Please try again.",
        )
    }

    /// Identity resolved to no stored record
    pub fn user_not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "User not found",
            "The requested user does not exist.",
        )
    }

    /// Signup with an email that is already registered
    pub fn duplicate_email() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "User with this email already exists",
            "Please use a different email address or try logging in.",
        )
    }

    /// Unexpected fault; detail stays server-side
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            "Something went wrong. Please try again later.",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Validation { message } => Self::validation(message),
            DomainError::Unauthorized { .. } => Self::invalid_token(),
            DomainError::NotFound { .. } => Self::user_not_found(),
            DomainError::Conflict { .. } => Self::duplicate_email(),
            DomainError::Provider { .. } | DomainError::Storage { .. } | DomainError::Internal { .. } => {
                tracing::error!(error = %err, "Internal error surfaced to client");
                Self::internal()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.body.error, self.body.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = ApiError::validation("email is required");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, "Validation error");
        assert_eq!(err.body.message, "email is required");
    }

    #[test]
    fn test_auth_errors_are_unauthorized() {
        assert_eq!(ApiError::malformed_auth_header().status, StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::invalid_token().status, StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::invalid_credentials().status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_duplicate_email_is_client_error() {
        let err = ApiError::duplicate_email();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: ApiError = DomainError::not_found("User 'a@x.com' not found").into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body.error, "User not found");

        let err: ApiError = DomainError::conflict("duplicate").into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err: ApiError = DomainError::storage("connection lost").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        // Detail is not leaked to the client.
        assert!(!err.body.message.contains("connection lost"));
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::invalid_credentials();
        let json = serde_json::to_string(&err.body).unwrap();

        assert!(json.contains("\"error\":\"Invalid credentials\""));
        assert!(json.contains("\"message\""));
    }
}
