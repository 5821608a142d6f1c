//! Authentication handlers
//!
//! Login exchanges a known loginId for a signed bearer token. There is
//! no password step; the login id is the whole credential.

use axum::{
    extract::State,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ApiError;
use crate::api::middleware::LibraryState;
use pagemark_auth::{AuthUser, AuthenticatedIdentity, Claims};

/// Request for POST /auth/login
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub login_id: String,
}

/// Response for POST /auth/login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id: Uuid,
    pub login_id: String,
    pub display_name: String,
}

/// POST /auth/login - Exchange a login id for a bearer token
pub async fn login(
    State(state): State<LibraryState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let login_id = request.login_id.trim();
    if login_id.is_empty() {
        return Err(ApiError::Validation("loginId is required".to_string()));
    }

    let user = state
        .repos
        .users
        .find_by_login_id(login_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

    let mut claims = Claims::new();
    claims.set("sub", user.id.to_string());
    claims.set("loginId", user.login_id.clone());
    let access_token = state.tokens.sign(claims);

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        access_token,
        user: LoginUser {
            id: user.id,
            login_id: user.login_id,
            display_name: user.display_name,
        },
    }))
}

/// GET /auth/me - The caller's authenticated identity
pub async fn me(AuthUser(identity): AuthUser) -> Json<AuthenticatedIdentity> {
    Json(identity)
}
