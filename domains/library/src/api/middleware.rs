//! Library domain state and auth integration

use axum::extract::FromRef;
use pagemark_auth::TokenService;
use pagemark_catalog::BookCatalog;
use std::sync::Arc;

use crate::LibraryRepositories;

/// Application state for the library domain
#[derive(Clone)]
pub struct LibraryState {
    pub repos: LibraryRepositories,
    pub tokens: TokenService,
    pub catalog: Arc<dyn BookCatalog>,
}

impl FromRef<LibraryState> for TokenService {
    fn from_ref(state: &LibraryState) -> Self {
        state.tokens.clone()
    }
}
