//! Bearer token authentication for the Pagemark API
//!
//! Provides HS256 token signing and verification plus axum extractors
//! that work with any state implementing `FromRef<S>` for `TokenService`.

mod claims;
mod codec;
mod config;
mod context;
mod error;
mod extractors;
mod service;
mod signer;

pub use claims::Claims;
pub use config::AuthConfig;
pub use context::AuthenticatedIdentity;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use service::TokenService;
pub use signer::Signer;
