//! Feeling handlers
//!
//! Feelings hang off a user book; every operation first confirms the
//! book belongs to the caller.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::{authenticated_user_id, ensure_user_book_owned, ApiError};
use crate::api::middleware::LibraryState;
use crate::domain::entities::Feeling;
use crate::repository::NewFeeling;
use pagemark_auth::AuthUser;

/// Request for recording a feeling
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeelingRequest {
    pub user_book_id: Uuid,

    #[serde(default)]
    pub text: String,

    #[validate(range(min = 1, message = "pageNumber must be greater than or equal to 1"))]
    pub page_number: Option<i32>,
}

/// GET /feelings/{userBookId} - List feelings for one of the caller's books
pub async fn list(
    AuthUser(identity): AuthUser,
    State(state): State<LibraryState>,
    Path(user_book_id): Path<Uuid>,
) -> Result<Json<Vec<Feeling>>, ApiError> {
    let user_id = authenticated_user_id(&identity)?;

    ensure_user_book_owned(&state, user_id, user_book_id).await?;

    let feelings = state
        .repos
        .feelings
        .list_for_user_book(user_id, user_book_id)
        .await?;

    Ok(Json(feelings))
}

/// POST /feelings - Record a feeling against one of the caller's books
pub async fn create(
    AuthUser(identity): AuthUser,
    State(state): State<LibraryState>,
    Json(request): Json<CreateFeelingRequest>,
) -> Result<Json<Feeling>, ApiError> {
    let user_id = authenticated_user_id(&identity)?;

    request
        .validate()
        .map_err(|e| ApiError::Validation(format!("Validation failed: {}", e)))?;

    let text = request.text.trim();
    if text.is_empty() {
        return Err(ApiError::Validation("text is required".to_string()));
    }

    ensure_user_book_owned(&state, user_id, request.user_book_id).await?;

    let feeling = state
        .repos
        .feelings
        .insert(NewFeeling {
            user_id,
            user_book_id: request.user_book_id,
            text: text.to_string(),
            page_number: request.page_number,
        })
        .await?;

    Ok(Json(feeling))
}
