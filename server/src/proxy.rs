//! Reverse proxy for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls same-origin `/api/*` paths; this handler forwards them
//! to `BACKEND_URL` unchanged (method, path, query, body, `Authorization`)
//! and relays the backend's status, headers, and body. The backend's own
//! envelope is never rewritten, so the client classifies errors exactly as
//! it would talking to the backend directly.
//!
//! ERROR HANDLING
//! ==============
//! Failures of the proxy itself answer in the backend's envelope shape.
//! Backend trouble is a 5xx, which the client treats as a transport failure;
//! an oversized body is a 413 and any other unreadable body a 400.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::uri::PathAndQuery;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http_body_util::LengthLimitError;

use crate::state::AppState;

/// Largest request body forwarded to the backend.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Headers that describe one hop and must not be forwarded.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {MAX_BODY_BYTES} bytes")]
    TooLarge,
    #[error("unreadable request body: {0}")]
    Body(axum::Error),
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::TooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large"),
            Self::Body(_) => (StatusCode::BAD_REQUEST, "Unreadable request body"),
            Self::Upstream(e) if e.is_timeout() => (StatusCode::GATEWAY_TIMEOUT, "Backend timed out"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "Backend unavailable"),
        };
        (status, Json(serde_json::json!({ "success": false, "message": message, "data": null }))).into_response()
    }
}

impl ProxyError {
    /// Classify a failed body read; only the length limit is a 413.
    pub fn from_body(error: axum::Error) -> Self {
        let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&error);
        while let Some(e) = source {
            if e.is::<LengthLimitError>() {
                return Self::TooLarge;
            }
            source = e.source();
        }
        Self::Body(error)
    }
}

/// Backend URL for an incoming path + query.
pub fn target_url(backend_url: &str, path_and_query: &str) -> String {
    format!("{}{}", backend_url.trim_end_matches('/'), path_and_query)
}

/// Copy of `headers` without hop-by-hop entries.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !HOP_BY_HOP.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Forward one request to the backend and relay its answer.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), PathAndQuery::as_str);
    let url = target_url(&state.config.backend_url, path_and_query);
    let body = axum::body::to_bytes(body, MAX_BODY_BYTES).await.map_err(ProxyError::from_body)?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(method = %parts.method, %url, error = %e, "backend request failed");
            ProxyError::Upstream(e)
        })?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, %url, %status, "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
