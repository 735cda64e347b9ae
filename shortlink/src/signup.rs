//! Uniform result of a registration attempt.
//!
//! The backend answers sign-up with HTTP 200 even when it refuses (duplicate
//! email, for instance), so the envelope's `success` flag is authoritative.
//! Anything the backend said, success or refusal, becomes a
//! [`SignupOutcome`]; only a failure with no backend answer is an error.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::envelope::Envelope;
use crate::error::{ApiError, body_message, classify_response};

pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to create account.";
pub const SIGNUP_OK_MESSAGE: &str = "Account created successfully! Please sign in.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupOutcome {
    pub success: bool,
    pub message: String,
}

/// Translate the sign-up answer into a [`SignupOutcome`].
///
/// # Errors
///
/// Returns [`ApiError::Transport`] for 5xx answers without a backend message
/// and for 2xx bodies that are not an envelope.
pub fn signup_outcome(status: u16, body: &str) -> Result<SignupOutcome, ApiError> {
    if (200..300).contains(&status) {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(body).map_err(|e| ApiError::transport(format!("invalid response body: {e}")))?;
        let message = envelope.message.filter(|m| !m.trim().is_empty());
        return Ok(if envelope.success {
            SignupOutcome { success: true, message: message.unwrap_or_else(|| SIGNUP_OK_MESSAGE.to_owned()) }
        } else {
            SignupOutcome { success: false, message: message.unwrap_or_else(|| SIGNUP_FAILED_MESSAGE.to_owned()) }
        });
    }
    match classify_response(status, body) {
        ApiError::Transport { message, .. } if body_message(body).is_some() => {
            Ok(SignupOutcome { success: false, message })
        }
        err @ ApiError::Transport { .. } => Err(err),
        err => Ok(SignupOutcome {
            success: false,
            message: err.backend_message().unwrap_or(SIGNUP_FAILED_MESSAGE).to_owned(),
        }),
    }
}
