//! Axum extractors for authentication
//!
//! Generic over any state `S` where `TokenService: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::context::AuthenticatedIdentity;
use crate::error::AuthError;
use crate::service::TokenService;

/// Authenticated user extractor.
///
/// Rejects the request with 401 before the handler runs unless the
/// `Authorization` header carries a valid bearer token whose claims name
/// a string subject. The identity is also inserted into the request
/// extensions for downstream middleware.
#[derive(Debug)]
pub struct AuthUser(pub AuthenticatedIdentity);

impl<S> FromRequestParts<S> for AuthUser
where
    TokenService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let service = TokenService::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?;
        let header_str = auth_header
            .to_str()
            .map_err(|_| AuthError::MissingAuthHeader)?;

        let token = extract_bearer_token(header_str)?;
        let claims = service.verify(token)?;
        let identity = AuthenticatedIdentity::from_claims(&claims)?;

        parts.extensions.insert(identity.clone());

        Ok(AuthUser(identity))
    }
}

/// Extract the token from an `Authorization` header value.
///
/// The scheme must be exactly `Bearer` (case-sensitive), separated from
/// a non-empty token by a single space.
fn extract_bearer_token(header: &str) -> Result<&str, AuthError> {
    let (scheme, token) = header
        .split_once(' ')
        .ok_or(AuthError::UnsupportedScheme)?;

    if scheme != "Bearer" || token.is_empty() {
        return Err(AuthError::UnsupportedScheme);
    }

    Ok(token)
}
