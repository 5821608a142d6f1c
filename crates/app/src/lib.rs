//! Pagemark application composition root
//!
//! Composes the library domain router with shared infrastructure routes.

use axum::Router;
use pagemark_auth::{AuthConfig, TokenService};
use pagemark_catalog::{CatalogConfig, CatalogFactory};
use pagemark_common::Config;
use pagemark_library::{LibraryRepositories, LibraryState};
use sqlx::PgPool;
use std::sync::Arc;

/// Create the main application router with all routes and middleware
pub async fn create_app(config: &Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    // Create repositories
    let repos = LibraryRepositories::new(pool);

    // Create the token service from configuration
    let tokens = TokenService::new(AuthConfig {
        secret: config.jwt_secret.clone(),
        token_lifetime_seconds: config.jwt_expires_in_seconds,
    });

    // Create the book catalog from configuration
    let catalog = CatalogFactory::create(CatalogConfig {
        provider: config.catalog_provider.clone(),
        client_id: config.naver_client_id.clone(),
        client_secret: config.naver_client_secret.clone(),
        ttb_key: config.aladin_ttb_key.clone(),
    })
    .map_err(|e| anyhow::anyhow!("Failed to create book catalog: {}", e))?;

    // Create library domain state
    let library_state = LibraryState {
        repos,
        tokens,
        catalog: Arc::from(catalog),
    };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Pagemark API v0.1.0" }))
        .merge(pagemark_library::routes().with_state(library_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
