//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use std::env;

/// Default token lifetime when JWT_EXPIRES_IN is unset: 24 hours.
const DEFAULT_TOKEN_LIFETIME_SECONDS: i64 = 86_400;

#[derive(Clone)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Token signing secret and lifetime
    pub jwt_secret: String,
    pub jwt_expires_in_seconds: i64,

    /// Book search API credentials
    pub naver_client_id: String,
    pub naver_client_secret: String,
    pub aladin_ttb_key: Option<String>,

    /// Catalog backend selector ("http" or "mock")
    pub catalog_provider: String,

    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "change-me".to_string()),
            jwt_expires_in_seconds: env::var("JWT_EXPIRES_IN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECONDS),

            naver_client_id: env::var("NAVER_CLIENT_ID")
                .map_err(|_| anyhow::anyhow!("NAVER_CLIENT_ID is required"))?,
            naver_client_secret: env::var("NAVER_CLIENT_SECRET")
                .map_err(|_| anyhow::anyhow!("NAVER_CLIENT_SECRET is required"))?,
            aladin_ttb_key: env::var("ALADIN_TTB_KEY").ok(),

            catalog_provider: env::var("CATALOG_PROVIDER").unwrap_or_else(|_| "http".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "pagemark=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expires_in_seconds", &self.jwt_expires_in_seconds)
            .field("naver_client_id", &self.naver_client_id)
            .field("naver_client_secret", &"[REDACTED]")
            .field(
                "aladin_ttb_key",
                &self.aladin_ttb_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("catalog_provider", &self.catalog_provider)
            .field("log_level", &self.log_level)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .finish()
    }
}
