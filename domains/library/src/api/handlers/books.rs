//! Book search handlers
//!
//! Thin proxies over the external book catalog. These routes are public;
//! registering results on a shelf is what requires authentication.

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;

use super::ApiError;
use crate::api::middleware::LibraryState;
use crate::domain::validation::is_isbn13;
use pagemark_catalog::{BookSearchPage, SearchQuery};

/// Query parameters for GET /books/search
#[derive(Debug, Deserialize)]
pub struct SearchBooksQuery {
    pub query: Option<String>,
    pub start: Option<i64>,
    pub display: Option<i64>,
}

/// GET /books/search - Keyword search against the book API
pub async fn search_books(
    State(state): State<LibraryState>,
    Query(params): Query<SearchBooksQuery>,
) -> Result<Json<BookSearchPage>, ApiError> {
    let query = params.query.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::Validation(
            "query is a required search parameter".to_string(),
        ));
    }

    let start = parse_positive(params.start, "start")?;
    let display = parse_positive(params.display, "display")?;

    let page = state
        .catalog
        .search(&SearchQuery {
            query: query.to_string(),
            start,
            display,
        })
        .await?;

    Ok(Json(page))
}

/// GET /books/{isbn13} - Look up a single book by 13-digit ISBN
pub async fn get_book_by_isbn13(
    State(state): State<LibraryState>,
    Path(isbn13): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let normalized = isbn13.trim();
    if normalized.is_empty() {
        return Err(ApiError::Validation("isbn13 is required".to_string()));
    }
    if !is_isbn13(normalized) {
        return Err(ApiError::Validation(
            "isbn13 must be a 13-digit numeric string".to_string(),
        ));
    }

    let document = state
        .catalog
        .find_by_isbn13(normalized)
        .await?
        .ok_or_else(|| ApiError::NotFound("Book not found".to_string()))?;

    Ok(Json(document))
}

fn parse_positive(value: Option<i64>, field: &str) -> Result<Option<u32>, ApiError> {
    match value {
        None => Ok(None),
        Some(v) if v > 0 && v <= i64::from(u32::MAX) => Ok(Some(v as u32)),
        Some(_) => Err(ApiError::Validation(format!(
            "{field} must be a positive integer"
        ))),
    }
}
