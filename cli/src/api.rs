//! `reqwest` execution of [`ApiRequest`] values.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use shortlink::envelope::{decode_ack, decode_data};
use shortlink::validation::parse_http_url;
use shortlink::{ApiRequest, Method};

use crate::error::CliError;

pub const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Fails on a base URL without an http(s) scheme or when the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if parse_http_url(base_url).is_none() {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, base_url: base_url.to_owned() })
    }

    /// Send `request`, returning raw status and body.
    ///
    /// # Errors
    ///
    /// Network failures.
    pub async fn send(&self, request: &ApiRequest) -> Result<(u16, String), CliError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.http.request(method, request.url(&self.base_url));
        if let Some(authorization) = &request.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// Send `request` and decode the envelope's `data`.
    ///
    /// # Errors
    ///
    /// Network failures and classified backend refusals.
    pub async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, CliError> {
        let (status, body) = self.send(&request).await?;
        Ok(decode_data(status, &body)?)
    }

    /// Send `request` where only success matters.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch`].
    pub async fn ack(&self, request: ApiRequest) -> Result<Option<String>, CliError> {
        let (status, body) = self.send(&request).await?;
        Ok(decode_ack(status, &body)?)
    }
}
