//! The backend's response envelope and page wrapper.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, classify_response};

/// Uniform `{success, message, data, timestamp}` wrapper around every answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// One page of a paginated list, as nested inside `data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based index of this page.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { content: Vec::new(), total_elements: 0, total_pages: 0, number: 0, size: 0 }
    }
}

/// Decode a full envelope from an HTTP answer.
///
/// # Errors
///
/// Non-2xx statuses and `success: false` envelopes are classified with
/// [`classify_response`]; an unparseable 2xx body is a transport error.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<Envelope<T>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(classify_response(status, body));
    }
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::transport(format!("invalid response body: {e}")))?;
    if !envelope.success {
        return Err(classify_response(status, body));
    }
    Ok(envelope)
}

/// Decode an envelope and return its `data`.
///
/// # Errors
///
/// Everything [`decode_envelope`] rejects, plus a successful envelope whose
/// `data` is missing.
pub fn decode_data<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    decode_envelope::<T>(status, body)?
        .data
        .ok_or_else(|| ApiError::transport("response envelope has no data"))
}

/// Decode an envelope whose `data` is irrelevant (deletes), keeping its message.
///
/// # Errors
///
/// Everything [`decode_envelope`] rejects.
pub fn decode_ack(status: u16, body: &str) -> Result<Option<String>, ApiError> {
    Ok(decode_envelope::<serde_json::Value>(status, body)?.message)
}
