//! Request-scoped identity derived from verified claims

use serde::Serialize;

use crate::claims::Claims;
use crate::error::AuthError;

/// The authenticated subject attached to a request for the duration of
/// its handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedIdentity {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_id: Option<String>,
}

impl AuthenticatedIdentity {
    /// Derive an identity from verified claims.
    ///
    /// Requires a string `sub`; a non-string `loginId` is dropped rather
    /// than rejected.
    pub fn from_claims(claims: &Claims) -> Result<Self, AuthError> {
        let id = claims
            .subject()
            .ok_or(AuthError::InvalidTokenSubject)?
            .to_string();

        Ok(Self {
            id,
            login_id: claims.login_id().map(String::from),
        })
    }
}
