//! Token lifecycle: signing and verification
//!
//! A token is three dot-separated segments: encoded header, encoded
//! payload, signature. The header is fixed to `{"alg":"HS256","typ":"JWT"}`
//! and is not inspected on verify: verification always recomputes the
//! HMAC, so there is no algorithm negotiation to confuse.
//!
//! A token has no revoked state: once issued it stays valid until its
//! `exp` passes.

use chrono::Utc;
use serde_json::{json, Value};

use crate::claims::Claims;
use crate::codec;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::signer::Signer;

/// Signs and verifies bearer tokens.
#[derive(Debug, Clone)]
pub struct TokenService {
    signer: Signer,
    token_lifetime_seconds: i64,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            signer: Signer::new(config.secret),
            token_lifetime_seconds: config.token_lifetime_seconds,
        }
    }

    /// Issue a signed token for the given claims.
    ///
    /// `iat` (now) and `exp` (now + lifetime) are injected and override
    /// any caller-supplied values under the same keys.
    pub fn sign(&self, claims: Claims) -> String {
        self.sign_at(claims, Utc::now().timestamp())
    }

    fn sign_at(&self, mut claims: Claims, now: i64) -> String {
        claims.set("iat", now);
        claims.set("exp", now + self.token_lifetime_seconds);

        let header_segment = codec::encode(&json!({"alg": "HS256", "typ": "JWT"}));
        let payload_segment = codec::encode(&Value::Object(claims.0));
        let signature = self.signer.compute(&header_segment, &payload_segment);

        format!("{header_segment}.{payload_segment}.{signature}")
    }

    /// Verify a token and return its claims.
    ///
    /// A missing or non-numeric `exp` is treated as never expiring.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    fn verify_at(&self, token: &str, now: i64) -> Result<Claims, AuthError> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let mut segments = token.split('.');
        let (header_segment, payload_segment, signature) =
            match (segments.next(), segments.next(), segments.next(), segments.next()) {
                (Some(h), Some(p), Some(s), None) => (h, p, s),
                _ => return Err(AuthError::MalformedToken),
            };

        if !self.signer.verify(header_segment, payload_segment, signature) {
            return Err(AuthError::InvalidSignature);
        }

        let claims = match codec::decode(payload_segment)? {
            Value::Object(map) => Claims(map),
            _ => return Err(AuthError::MalformedTokenSegment),
        };

        if let Some(exp) = claims.expires_at() {
            if exp < now {
                return Err(AuthError::TokenExpired);
            }
        }

        Ok(claims)
    }
}
