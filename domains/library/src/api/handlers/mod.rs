//! API handlers for the library domain

pub mod auth;
pub mod books;
pub mod feelings;
pub mod user_books;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use uuid::Uuid;

use crate::api::middleware::LibraryState;
use pagemark_auth::AuthenticatedIdentity;
use pagemark_catalog::CatalogError;

/// Error response for API operations
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Standard API error type
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Upstream(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg.clone()),
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::Internal(error)
    }
}

impl From<pagemark_common::Error> for ApiError {
    fn from(error: pagemark_common::Error) -> Self {
        use pagemark_common::Error;
        match error {
            Error::Validation(msg) => ApiError::Validation(msg),
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::Conflict(msg) => ApiError::Conflict(msg),
            other => ApiError::Internal(anyhow::anyhow!(other)),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Configuration(msg) => ApiError::Internal(anyhow::anyhow!(msg)),
            CatalogError::Request(_) => {
                ApiError::Upstream("Book API is not reachable right now".to_string())
            }
            CatalogError::Response(_) => {
                ApiError::Upstream("Failed to fetch book data from the book API".to_string())
            }
        }
    }
}

/// Parse the caller's subject id into a database key.
///
/// Tokens are only issued for existing users, so a non-UUID subject means
/// the token was not minted by this service.
pub(crate) fn authenticated_user_id(identity: &AuthenticatedIdentity) -> Result<Uuid, ApiError> {
    Uuid::parse_str(&identity.id)
        .map_err(|_| ApiError::Unauthorized("Invalid token subject".to_string()))
}

/// Confirm a user book exists and belongs to the caller.
pub(crate) async fn ensure_user_book_owned(
    state: &LibraryState,
    user_id: Uuid,
    user_book_id: Uuid,
) -> Result<(), ApiError> {
    match state.repos.user_books.find_owner(user_book_id).await? {
        Some(owner) if owner == user_id => Ok(()),
        _ => Err(ApiError::NotFound("User book not found".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_codes() {
        let cases: Vec<(ApiError, StatusCode)> = vec![
            (
                ApiError::Validation("test".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Unauthorized("test".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::NotFound("test".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (ApiError::Conflict("test".to_string()), StatusCode::CONFLICT),
            (
                ApiError::Upstream("test".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ApiError::Internal(anyhow::anyhow!("test")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_catalog_errors_map_to_bad_gateway() {
        let request = ApiError::from(CatalogError::Request("timeout".to_string()));
        assert!(matches!(request, ApiError::Upstream(_)));

        let response = ApiError::from(CatalogError::Response("bad json".to_string()));
        assert!(matches!(response, ApiError::Upstream(_)));

        // Misconfiguration is our fault, not the upstream's
        let config = ApiError::from(CatalogError::Configuration("no key".to_string()));
        assert!(matches!(config, ApiError::Internal(_)));
    }

    #[test]
    fn test_authenticated_user_id_requires_uuid_subject() {
        let identity = AuthenticatedIdentity {
            id: "not-a-uuid".to_string(),
            login_id: None,
        };
        assert!(matches!(
            authenticated_user_id(&identity),
            Err(ApiError::Unauthorized(_))
        ));

        let uuid = Uuid::new_v4();
        let identity = AuthenticatedIdentity {
            id: uuid.to_string(),
            login_id: None,
        };
        assert_eq!(authenticated_user_id(&identity).unwrap(), uuid);
    }
}
