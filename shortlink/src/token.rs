//! Local decoding of the bearer token's expiry.
//!
//! The signature is never checked here; the backend does that on every call.
//! The client only reads the `exp` claim to decide whether a persisted
//! session is still worth presenting.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Why a token could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Shape,
    #[error("token payload is not valid base64url")]
    Encoding,
    #[error("token payload is not a JSON object")]
    Payload,
    #[error("token payload has no numeric `exp` claim")]
    MissingExpiry,
}

/// Expiry of `token` in milliseconds since the Unix epoch.
///
/// # Errors
///
/// Returns [`TokenError`] when the token is malformed or carries no `exp`.
pub fn expiry_ms(token: &str) -> Result<i64, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::Shape);
    }
    // Some issuers keep `=` padding; the no-pad engine rejects it.
    let payload = parts[1].trim_end_matches('=');
    let decoded = URL_SAFE_NO_PAD.decode(payload).map_err(|_| TokenError::Encoding)?;
    let json: serde_json::Value = serde_json::from_slice(&decoded).map_err(|_| TokenError::Payload)?;
    if !json.is_object() {
        return Err(TokenError::Payload);
    }
    let exp = json.get("exp").and_then(serde_json::Value::as_f64).ok_or(TokenError::MissingExpiry)?;
    #[allow(clippy::cast_possible_truncation)]
    Ok((exp * 1000.0) as i64)
}

/// Whether `token` is readable and unexpired at `now_ms`.
#[must_use]
pub fn is_live(token: &str, now_ms: i64) -> bool {
    expiry_ms(token).is_ok_and(|exp| exp > now_ms)
}
