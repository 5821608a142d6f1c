//! User book handlers
//!
//! All routes here require authentication; every query is scoped to the
//! caller's user id so one user can never see or touch another's shelf.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::{authenticated_user_id, ensure_user_book_owned, ApiError};
use crate::api::middleware::LibraryState;
use crate::domain::entities::{ReadingStatus, UserBook};
use crate::domain::validation::is_isbn13;
use crate::repository::{NewUserBook, UserBookChanges};
use pagemark_auth::AuthUser;
use pagemark_catalog::page_count_from_lookup;
use pagemark_common::Error;

/// Request for registering a book
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBookRequest {
    #[serde(default)]
    pub external_id: String,

    #[serde(default)]
    pub title: String,

    pub author: Option<String>,

    #[validate(range(min = 1, message = "pageCount must be greater than or equal to 1"))]
    pub page_count: Option<i32>,

    pub cover_url: Option<String>,

    pub status: Option<String>,

    #[validate(range(min = 0, message = "currentPage must be greater than or equal to 0"))]
    pub current_page: Option<i32>,

    pub goal_date: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

/// Request for updating reading progress
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserBookRequest {
    #[validate(range(min = 1, message = "pageCount must be greater than or equal to 1"))]
    pub page_count: Option<i32>,

    #[validate(range(min = 0, message = "currentPage must be greater than or equal to 0"))]
    pub current_page: Option<i32>,

    pub goal_date: Option<DateTime<Utc>>,
}

/// GET /user-books - List the caller's registered books
pub async fn list_mine(
    AuthUser(identity): AuthUser,
    State(state): State<LibraryState>,
) -> Result<Json<Vec<UserBook>>, ApiError> {
    let user_id = authenticated_user_id(&identity)?;
    let books = state.repos.user_books.list_for_user(user_id).await?;
    Ok(Json(books))
}

/// POST /user-books - Register a book on the caller's shelf
pub async fn create(
    AuthUser(identity): AuthUser,
    State(state): State<LibraryState>,
    Json(request): Json<CreateUserBookRequest>,
) -> Result<Json<UserBook>, ApiError> {
    let user_id = authenticated_user_id(&identity)?;

    request
        .validate()
        .map_err(|e| ApiError::Validation(format!("Validation failed: {}", e)))?;

    let external_id = request.external_id.trim();
    if external_id.is_empty() {
        return Err(ApiError::Validation("externalId is required".to_string()));
    }
    let title = request.title.trim();
    if title.is_empty() {
        return Err(ApiError::Validation("title is required".to_string()));
    }

    let status = ReadingStatus::parse(request.status.as_deref())?;
    let author = request.author.as_deref().map(str::trim).filter(|a| !a.is_empty());
    let cover_url = request
        .cover_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());

    let page_count = match request.page_count {
        Some(count) => Some(count),
        None => lookup_page_count(&state, external_id).await,
    };

    let book = state
        .repos
        .user_books
        .insert(NewUserBook {
            user_id,
            external_id: external_id.to_string(),
            title: title.to_string(),
            author: author.map(String::from),
            page_count,
            cover_url: cover_url.map(String::from),
            status,
            current_page: request.current_page,
            goal_date: request.goal_date,
            started_at: request.started_at,
            finished_at: request.finished_at,
        })
        .await
        .map_err(|e| match e {
            Error::Conflict(_) => {
                ApiError::Conflict("Book already registered for this user".to_string())
            }
            Error::NotFound(_) => ApiError::NotFound("User not found".to_string()),
            other => ApiError::from(other),
        })?;

    tracing::info!(user_id = %user_id, user_book_id = %book.id, "User book registered");

    Ok(Json(book))
}

/// PATCH /user-books/{id} - Update reading progress
pub async fn update(
    AuthUser(identity): AuthUser,
    State(state): State<LibraryState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserBookRequest>,
) -> Result<Json<UserBook>, ApiError> {
    let user_id = authenticated_user_id(&identity)?;

    request
        .validate()
        .map_err(|e| ApiError::Validation(format!("Validation failed: {}", e)))?;

    let changes = UserBookChanges {
        page_count: request.page_count,
        current_page: request.current_page,
        goal_date: request.goal_date,
    };
    if changes.is_empty() {
        return Err(ApiError::Validation(
            "At least one updatable field is required".to_string(),
        ));
    }

    ensure_user_book_owned(&state, user_id, id).await?;

    let book = state.repos.user_books.update(id, changes).await?;
    Ok(Json(book))
}

/// DELETE /user-books/{id} - Remove a book from the caller's shelf
pub async fn remove(
    AuthUser(identity): AuthUser,
    State(state): State<LibraryState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let user_id = authenticated_user_id(&identity)?;

    ensure_user_book_owned(&state, user_id, id).await?;

    let deleted = state.repos.user_books.delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound("User book not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Best-effort page count auto-fill from the catalog.
///
/// Only attempted for 13-digit ISBNs; lookup failures are logged and
/// never fail the registration.
async fn lookup_page_count(state: &LibraryState, external_id: &str) -> Option<i32> {
    if !is_isbn13(external_id) {
        return None;
    }

    match state.catalog.find_by_isbn13(external_id).await {
        Ok(Some(document)) => page_count_from_lookup(&document),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(
                isbn13 = %external_id,
                error = %e,
                "Failed to auto-fill pageCount from the catalog"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_parses_camel_case() {
        let request: CreateUserBookRequest = serde_json::from_str(
            r#"{
                "externalId": "9780441478125",
                "title": "The Left Hand of Darkness",
                "pageCount": 304,
                "currentPage": 0,
                "goalDate": "2024-06-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(request.external_id, "9780441478125");
        assert_eq!(request.page_count, Some(304));
        assert_eq!(request.current_page, Some(0));
        assert!(request.goal_date.is_some());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_non_positive_page_count() {
        let request: CreateUserBookRequest = serde_json::from_str(
            r#"{"externalId": "x", "title": "t", "pageCount": 0}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_negative_current_page() {
        let request: CreateUserBookRequest = serde_json::from_str(
            r#"{"externalId": "x", "title": "t", "currentPage": -1}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_validation() {
        let valid: UpdateUserBookRequest =
            serde_json::from_str(r#"{"currentPage": 42}"#).unwrap();
        assert!(valid.validate().is_ok());

        let invalid: UpdateUserBookRequest =
            serde_json::from_str(r#"{"pageCount": -5}"#).unwrap();
        assert!(invalid.validate().is_err());
    }
}
