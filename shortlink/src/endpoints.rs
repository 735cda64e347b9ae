//! Request builders for every backend endpoint the client consumes.
//!
//! ARCHITECTURE
//! ============
//! One submodule per backend resource (`auth`, `organizations`, `urls`), one
//! function per operation. Each returns a transport-neutral [`ApiRequest`];
//! the browser executes it with `gloo-net`, the CLI with `reqwest`. Every
//! authenticated builder takes the [`Session`] so the bearer header can never
//! be forgotten.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use serde::Serialize;

use crate::model::Session;

pub const AUTH_PATH: &str = "/api/auth";
pub const ORGANIZATIONS_PATH: &str = "/api/organizations";
pub const URLS_PATH: &str = "/api/urls";

/// Default page size used by every list view.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// HTTP verb of an [`ApiRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully described backend call, ready for any HTTP client to send.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path plus query string, relative to the backend origin.
    pub path: String,
    pub body: Option<serde_json::Value>,
    /// Value of the `Authorization` header, if the call is authenticated.
    pub authorization: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: String) -> Self {
        Self { method, path, body: None, authorization: None }
    }

    fn authorized(mut self, session: &Session) -> Self {
        self.authorization = Some(session.bearer());
        self
    }

    fn json<T: Serialize>(mut self, body: &T) -> Self {
        // Model types serialize infallibly; a failure here would be a bug in a derive.
        self.body = serde_json::to_value(body).ok();
        self
    }

    /// Join `path` onto `base_url`, tolerating a trailing slash on the base.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

/// Sort direction for list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Pagination and sort parameters accepted by every list endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageQuery {
    /// Zero-based page index.
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_dir: SortDir,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 0, size: DEFAULT_PAGE_SIZE, sort_by: "createdAt".to_owned(), sort_dir: SortDir::Desc }
    }
}

impl PageQuery {
    /// Default query positioned at `page`.
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self { page, ..Self::default() }
    }

    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!(
            "page={}&size={}&sortBy={}&sortDir={}",
            self.page,
            self.size,
            self.sort_by,
            self.sort_dir.as_str()
        )
    }
}

pub mod auth {
    use super::{AUTH_PATH, ApiRequest, Method};

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SignUpBody<'a> {
        first_name: &'a str,
        last_name: &'a str,
        email: &'a str,
        password: &'a str,
    }

    #[derive(serde::Serialize)]
    struct SignInBody<'a> {
        email: &'a str,
        password: &'a str,
    }

    /// `POST /api/auth/signin`
    #[must_use]
    pub fn signin(email: &str, password: &str) -> ApiRequest {
        ApiRequest::new(Method::Post, format!("{AUTH_PATH}/signin")).json(&SignInBody { email, password })
    }

    /// `POST /api/auth/signup`
    #[must_use]
    pub fn signup(first_name: &str, last_name: &str, email: &str, password: &str) -> ApiRequest {
        ApiRequest::new(Method::Post, format!("{AUTH_PATH}/signup")).json(&SignUpBody {
            first_name,
            last_name,
            email,
            password,
        })
    }
}

pub mod organizations {
    use super::{ApiRequest, Method, ORGANIZATIONS_PATH, PageQuery};
    use crate::model::{CreateOrganizationRequest, Session};

    /// `POST /api/organizations`
    #[must_use]
    pub fn create(session: &Session, body: &CreateOrganizationRequest) -> ApiRequest {
        ApiRequest::new(Method::Post, ORGANIZATIONS_PATH.to_owned()).authorized(session).json(body)
    }

    /// `GET /api/organizations?page&size&sortBy&sortDir`
    #[must_use]
    pub fn list(session: &Session, query: &PageQuery) -> ApiRequest {
        ApiRequest::new(Method::Get, format!("{ORGANIZATIONS_PATH}?{}", query.to_query_string())).authorized(session)
    }

    /// `GET /api/organizations/{id}`
    #[must_use]
    pub fn get(session: &Session, id: i64) -> ApiRequest {
        ApiRequest::new(Method::Get, format!("{ORGANIZATIONS_PATH}/{id}")).authorized(session)
    }

    /// `PUT /api/organizations/{id}`
    #[must_use]
    pub fn update(session: &Session, id: i64, body: &CreateOrganizationRequest) -> ApiRequest {
        ApiRequest::new(Method::Put, format!("{ORGANIZATIONS_PATH}/{id}")).authorized(session).json(body)
    }

    /// `DELETE /api/organizations/{id}`
    #[must_use]
    pub fn delete(session: &Session, id: i64) -> ApiRequest {
        ApiRequest::new(Method::Delete, format!("{ORGANIZATIONS_PATH}/{id}")).authorized(session)
    }
}

pub mod urls {
    use super::{ApiRequest, Method, PageQuery, URLS_PATH};
    use crate::model::{CreateUrlRequest, Session, UpdateUrlRequest};

    /// `GET /api/urls`
    #[must_use]
    pub fn list_all(session: &Session, query: &PageQuery) -> ApiRequest {
        ApiRequest::new(Method::Get, format!("{URLS_PATH}?{}", query.to_query_string())).authorized(session)
    }

    /// `GET /api/urls/my-urls?page&size`
    #[must_use]
    pub fn list_mine(session: &Session, query: &PageQuery) -> ApiRequest {
        ApiRequest::new(Method::Get, format!("{URLS_PATH}/my-urls?{}", query.to_query_string())).authorized(session)
    }

    /// `GET /api/urls/organization/{id}`
    #[must_use]
    pub fn list_by_organization(session: &Session, organization_id: i64, query: &PageQuery) -> ApiRequest {
        ApiRequest::new(
            Method::Get,
            format!("{URLS_PATH}/organization/{organization_id}?{}", query.to_query_string()),
        )
        .authorized(session)
    }

    /// `GET /api/urls/{id}`
    #[must_use]
    pub fn get(session: &Session, id: i64) -> ApiRequest {
        ApiRequest::new(Method::Get, format!("{URLS_PATH}/{id}")).authorized(session)
    }

    /// `POST /api/urls`
    #[must_use]
    pub fn create(session: &Session, body: &CreateUrlRequest) -> ApiRequest {
        ApiRequest::new(Method::Post, URLS_PATH.to_owned()).authorized(session).json(body)
    }

    /// `PUT /api/urls/{id}`
    #[must_use]
    pub fn update(session: &Session, id: i64, body: &UpdateUrlRequest) -> ApiRequest {
        ApiRequest::new(Method::Put, format!("{URLS_PATH}/{id}")).authorized(session).json(body)
    }

    /// `DELETE /api/urls/{id}`
    #[must_use]
    pub fn delete(session: &Session, id: i64) -> ApiRequest {
        ApiRequest::new(Method::Delete, format!("{URLS_PATH}/{id}")).authorized(session)
    }
}
