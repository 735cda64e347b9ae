//! Organization calls used by the views.
//!
//! Views only create, list, and open organizations; update and delete exist
//! as request builders in `shortlink::endpoints::organizations` and are
//! driven from the CLI.

use shortlink::{ApiError, CreateOrganizationRequest, Organization, Page, PageQuery, Session, endpoints};

use super::http;

/// # Errors
///
/// Classified backend or transport failure.
pub async fn create(session: &Session, body: &CreateOrganizationRequest) -> Result<Organization, ApiError> {
    http::fetch(endpoints::organizations::create(session, body)).await
}

/// # Errors
///
/// Classified backend or transport failure.
pub async fn list(session: &Session, query: &PageQuery) -> Result<Page<Organization>, ApiError> {
    http::fetch(endpoints::organizations::list(session, query)).await
}

/// # Errors
///
/// Classified backend or transport failure.
pub async fn get(session: &Session, id: i64) -> Result<Organization, ApiError> {
    http::fetch(endpoints::organizations::get(session, id)).await
}
