//! Authentication errors
//!
//! Every failure here is terminal and non-retriable. At the HTTP boundary
//! all variants collapse into a single 401 response; the originating
//! reason is logged but never revealed to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication failure reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header is missing")]
    MissingAuthHeader,

    #[error("Authorization header must use the Bearer scheme")]
    UnsupportedScheme,

    #[error("Bearer token is empty")]
    MissingToken,

    #[error("Token must have exactly three segments")]
    MalformedToken,

    #[error("Token segment is not valid base64url-encoded JSON")]
    MalformedTokenSegment,

    #[error("Token signature does not match")]
    InvalidSignature,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Token subject is missing or not a string")]
    InvalidTokenSubject,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!(reason = %self, "Request authentication failed");

        let body = Json(json!({
            "error": {
                "code": "UNAUTHORIZED",
                "message": "Authentication required",
            }
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_collapses_to_unauthorized() {
        let variants = [
            AuthError::MissingAuthHeader,
            AuthError::UnsupportedScheme,
            AuthError::MissingToken,
            AuthError::MalformedToken,
            AuthError::MalformedTokenSegment,
            AuthError::InvalidSignature,
            AuthError::TokenExpired,
            AuthError::InvalidTokenSubject,
        ];

        for error in variants {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }
}
