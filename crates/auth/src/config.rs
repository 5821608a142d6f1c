//! Authentication configuration
//!
//! Built once at process start and injected into `TokenService`; the
//! secret and lifetime are fixed for the process lifetime (no rotation).

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub token_lifetime_seconds: i64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"[REDACTED]")
            .field("token_lifetime_seconds", &self.token_lifetime_seconds)
            .finish()
    }
}
