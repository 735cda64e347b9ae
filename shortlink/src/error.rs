//! Error taxonomy shared by every service call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every HTTP answer that is not a successful envelope goes through
//! [`classify_response`] exactly once. Views never inspect status codes or
//! body shapes; they match on the [`ApiError`] tag and render
//! [`ApiError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when the backend rejects the session token.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Classified failure of a backend call or a client-side form check.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No usable answer: network failure, undecodable body, or a 5xx.
    #[error("transport error: {message}")]
    Transport { status: Option<u16>, message: String },
    /// The backend answered and refused the operation (`success: false` or 4xx).
    #[error("{message}")]
    Business { status: u16, message: String },
    /// Rejected on the client before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// The token was missing, rejected, or expired (401/403).
    #[error("unauthorized: {message}")]
    Unauthorized { status: u16, message: String },
}

impl ApiError {
    /// Transport failure without an HTTP status (request never completed).
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { status: None, message: message.into() }
    }

    /// Client-side validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Message written by the backend, when it sent one.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Business { message, .. } | Self::Unauthorized { message, .. } if !message.is_empty() => {
                Some(message.as_str())
            }
            _ => None,
        }
    }

    /// Text a view should display for this failure.
    ///
    /// `fallback` covers failures that carry nothing worth showing a user.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Transport { .. } => fallback.to_owned(),
            Self::Business { message, .. } if !message.trim().is_empty() => capitalize(message.trim()),
            Self::Business { .. } => fallback.to_owned(),
            Self::Validation(message) => message.clone(),
            Self::Unauthorized { .. } => SESSION_EXPIRED_MESSAGE.to_owned(),
        }
    }
}

/// Classify a non-successful answer from its HTTP status and raw body.
///
/// A 2xx status here means the envelope itself reported `success: false`.
#[must_use]
pub fn classify_response(status: u16, body: &str) -> ApiError {
    let message = body_message(body);
    match status {
        401 | 403 => ApiError::Unauthorized {
            status,
            message: message.unwrap_or_else(|| "authentication required".to_owned()),
        },
        500.. => ApiError::Transport {
            status: Some(status),
            message: message.unwrap_or_else(|| format!("server error: {status}")),
        },
        _ => match message {
            Some(message) if mentions_authentication(&message) => ApiError::Unauthorized { status, message },
            Some(message) => ApiError::Business { status, message },
            None => ApiError::Business { status, message: format!("request failed: {status}") },
        },
    }
}

/// Backend-written `message` (or `error`) field of a JSON body.
pub(crate) fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

fn mentions_authentication(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("authentication required") || lower.contains("token expired") || lower.contains("invalid token")
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
