//! Access-token expiry extraction.
//!
//! The backend issues JWTs whose payload carries a standard `exp` claim.
//! Decoding here is parse-only — no signature verification, since the
//! client only needs a renewal deadline, never a trust decision. Any parse
//! failure yields `None`, which session restore treats as already expired.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Extract the expiry of a JWT access token, in epoch milliseconds.
///
/// Returns `None` for anything that is not a three-part token with a
/// base64url JSON payload holding a numeric `exp` claim.
#[must_use]
pub fn token_expiry_millis(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?.as_i64()?;
    exp.checked_mul(1000)
}
