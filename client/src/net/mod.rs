//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` executes the transport-neutral requests built by
//! `shortlink::endpoints`; `auth`, `organizations`, and `urls` wrap one call
//! per backend operation and return decoded model types or a classified
//! `ApiError`.

pub mod auth;
pub mod http;
pub mod organizations;
pub mod urls;
