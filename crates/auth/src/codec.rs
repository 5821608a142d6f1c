//! Token segment encoding
//!
//! A token segment is the URL-safe, unpadded base64 encoding of a JSON
//! value's UTF-8 text. Encoding never fails; decoding fails when the
//! segment is not valid base64url, UTF-8, or JSON.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde_json::Value;

use crate::error::AuthError;

/// Encode a JSON value into a token segment.
pub(crate) fn encode(value: &Value) -> String {
    URL_SAFE_NO_PAD.encode(value.to_string())
}

/// Decode a token segment back into a JSON value.
pub(crate) fn decode(segment: &str) -> Result<Value, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| AuthError::MalformedTokenSegment)?;
    let text = String::from_utf8(bytes).map_err(|_| AuthError::MalformedTokenSegment)?;
    serde_json::from_str(&text).map_err(|_| AuthError::MalformedTokenSegment)
}
