//! HTTP execution of [`ApiRequest`] values.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with a transport error, since the
//! session lives in browser storage and SSR never holds a token.
//!
//! ERROR HANDLING
//! ==============
//! Failures before a status arrives become `ApiError::Transport`; everything
//! else is handed to `shortlink::envelope` for classification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;
use shortlink::envelope::{decode_ack, decode_data};
use shortlink::{ApiError, ApiRequest};

/// Origin prefix for backend paths, fixed at build time.
///
/// Empty means same-origin: the shortlink server proxies `/api/*` to the
/// backend.
pub const API_BASE: &str = match option_env!("SHORTLINK_API_BASE") {
    Some(base) => base,
    None => "",
};

/// Absolute or same-origin URL for `request`.
pub fn request_url(request: &ApiRequest) -> String {
    request.url(API_BASE)
}

/// Send `request`, returning the raw status and body.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the request could not be sent or
/// its body could not be read.
pub async fn send(request: &ApiRequest) -> Result<(u16, String), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        use shortlink::Method;

        let url = request_url(request);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(authorization) = &request.authorization {
            builder = builder.header("Authorization", authorization);
        }
        let sent = match &request.body {
            Some(body) => builder.json(body).map_err(|e| ApiError::transport(e.to_string()))?.send().await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| {
            log::warn!("{} {url} failed: {e}", request.method.as_str());
            ApiError::transport(e.to_string())
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport { status: Some(status), message: e.to_string() })?;
        Ok((status, body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::transport("not available on server"))
    }
}

/// Send `request` and decode the envelope's `data`.
///
/// # Errors
///
/// Transport failures, backend refusals, and undecodable bodies, classified.
pub async fn fetch<T: DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
    let (status, body) = send(&request).await?;
    decode_data(status, &body)
}

/// Send `request` where only success matters; returns the backend message.
///
/// # Errors
///
/// Same as [`fetch`].
pub async fn fetch_ack(request: ApiRequest) -> Result<Option<String>, ApiError> {
    let (status, body) = send(&request).await?;
    decode_ack(status, &body)
}
