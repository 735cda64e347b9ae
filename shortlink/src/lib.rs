//! Shared model and session core for the shortlink client.
//!
//! This crate owns everything both front ends (`client` in the browser and
//! `cli` on the terminal) agree on: the backend's JSON shapes, request
//! builders for every endpoint, error classification, token expiry decoding,
//! and the auth lifecycle state machine. It does no I/O of its own; callers
//! execute [`endpoints::ApiRequest`] values with whatever HTTP stack they have
//! and feed status + body back through [`envelope::decode_data`].

pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod guard;
pub mod model;
pub mod pagination;
pub mod session;
pub mod signup;
pub mod token;
pub mod validation;

pub use endpoints::{ApiRequest, Method, PageQuery, SortDir};
pub use envelope::{Envelope, Page};
pub use error::{ApiError, classify_response};
pub use model::{
    CreateOrganizationRequest, CreateUrlRequest, Organization, Session, ShortUrl, SignInResponse, UpdateUrlRequest,
    User,
};
pub use session::{AuthController, AuthPhase, MemorySessionStore, SessionStore};
