//! Token claims
//!
//! Claims are a string-keyed JSON map identifying the authenticated
//! subject. `sign` injects `iat` and `exp`; everything else is caller
//! supplied. Once signed, claims are immutable; issuing a new token is
//! the only way to change them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried in the payload segment of a token.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(pub Map<String, Value>);

impl Claims {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Set a claim, replacing any existing value under the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Subject identifier, when present as a string.
    pub fn subject(&self) -> Option<&str> {
        self.0.get("sub").and_then(Value::as_str)
    }

    /// Display login name, when present as a string.
    pub fn login_id(&self) -> Option<&str> {
        self.0.get("loginId").and_then(Value::as_str)
    }

    /// Issued-at in Unix seconds, when present as a number.
    pub fn issued_at(&self) -> Option<i64> {
        self.0.get("iat").and_then(Value::as_i64)
    }

    /// Expiry in Unix seconds, when present as a number.
    ///
    /// A missing or non-numeric `exp` yields None and the token is
    /// treated as never expiring.
    pub fn expires_at(&self) -> Option<i64> {
        self.0.get("exp").and_then(Value::as_i64)
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let mut claims = Claims::new();
        claims.set("sub", "u1");
        claims.set("loginId", "alice");
        claims.set("iat", 1_700_000_000i64);
        claims.set("exp", 1_700_086_400i64);

        assert_eq!(claims.subject(), Some("u1"));
        assert_eq!(claims.login_id(), Some("alice"));
        assert_eq!(claims.issued_at(), Some(1_700_000_000));
        assert_eq!(claims.expires_at(), Some(1_700_086_400));
    }

    #[test]
    fn test_non_string_subject_is_none() {
        let mut claims = Claims::new();
        claims.set("sub", 42);
        assert_eq!(claims.subject(), None);
    }

    #[test]
    fn test_non_numeric_expiry_is_none() {
        let mut claims = Claims::new();
        claims.set("exp", "tomorrow");
        assert_eq!(claims.expires_at(), None);

        let empty = Claims::new();
        assert_eq!(empty.expires_at(), None);
    }

    #[test]
    fn test_set_replaces_existing_value() {
        let mut claims = Claims::new();
        claims.set("sub", "u1");
        claims.set("sub", "u2");
        assert_eq!(claims.subject(), Some("u2"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let mut claims = Claims::new();
        claims.set("sub", "u1");
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value, json!({"sub": "u1"}));

        let parsed: Claims = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, claims);
    }
}
