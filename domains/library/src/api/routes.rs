//! Route definitions for the library domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{auth, books, feelings, user_books};
use super::middleware::LibraryState;

/// Create authentication routes
fn auth_routes() -> Router<LibraryState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
}

/// Create book search routes (public)
fn book_routes() -> Router<LibraryState> {
    Router::new()
        .route("/books/search", get(books::search_books))
        .route("/books/{isbn13}", get(books::get_book_by_isbn13))
}

/// Create user book routes
fn user_book_routes() -> Router<LibraryState> {
    Router::new()
        .route(
            "/user-books",
            get(user_books::list_mine).post(user_books::create),
        )
        .route(
            "/user-books/{id}",
            axum::routing::patch(user_books::update).delete(user_books::remove),
        )
}

/// Create feeling routes
fn feeling_routes() -> Router<LibraryState> {
    Router::new()
        .route("/feelings", post(feelings::create))
        .route("/feelings/{user_book_id}", get(feelings::list))
}

/// Create all library domain API routes
pub fn routes() -> Router<LibraryState> {
    Router::new()
        .merge(auth_routes())
        .merge(book_routes())
        .merge(user_book_routes())
        .merge(feeling_routes())
}
