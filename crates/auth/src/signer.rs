//! Token signature computation and verification
//!
//! Signatures are HMAC-SHA256 over `header + "." + payload`, base64url
//! encoded without padding. Verification uses constant-time comparison
//! to prevent timing attacks on the signature bytes.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes and verifies signatures over encoded token segments.
#[derive(Clone)]
pub struct Signer {
    secret: String,
}

impl Signer {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Compute the signature segment for an encoded header and payload.
    pub fn compute(&self, header_segment: &str, payload_segment: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(header_segment.as_bytes());
        mac.update(b".");
        mac.update(payload_segment.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }

    /// Check a candidate signature against the expected one.
    ///
    /// Returns false on any mismatch; never errors.
    pub fn verify(
        &self,
        header_segment: &str,
        payload_segment: &str,
        candidate_signature: &str,
    ) -> bool {
        let expected = self.compute(header_segment, payload_segment);
        constant_time_eq(expected.as_bytes(), candidate_signature.as_bytes())
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Constant-time byte comparison.
///
/// Execution time is independent of where the inputs first differ.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
