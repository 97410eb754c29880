//! Bearer-token authentication gate
//!
//! Verifies the `Authorization: Bearer <token>` header against the signing
//! secret and attaches the email identity to the request. The gate does not
//! touch the user store; resolving the identity to a record (and the 404
//! that may follow) is the handler's job.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Extractor for routes that require a valid bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        match state.token_service.verify(token) {
            Ok(claims) => {
                debug!(email = %claims.email, "Token verified");
                Ok(AuthUser {
                    email: claims.email,
                })
            }
            Err(err) => {
                warn!(error = %err, "Token verification failed");
                Err(ApiError::invalid_token())
            }
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The prefix match is case-sensitive with a single space; the token is
/// everything after it, untrimmed.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    match value.strip_prefix("Bearer ") {
        Some(token) => Ok(token),
        None => {
            warn!("Authorization attempt with missing or malformed header");
            Err(ApiError::malformed_auth_header())
        }
    }
}
