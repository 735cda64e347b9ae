//! Short-URL calls used by the views.
//!
//! Views list by owner or organization and edit from the card, so fetching
//! one URL by id and the unfiltered list stay CLI-only
//! (`shortlink::endpoints::urls::{get, list_all}`).

use shortlink::{ApiError, CreateUrlRequest, Page, PageQuery, Session, ShortUrl, UpdateUrlRequest, endpoints};

use super::http;

/// URLs created by the signed-in user.
///
/// # Errors
///
/// Classified backend or transport failure.
pub async fn list_mine(session: &Session, query: &PageQuery) -> Result<Page<ShortUrl>, ApiError> {
    http::fetch(endpoints::urls::list_mine(session, query)).await
}

/// # Errors
///
/// Classified backend or transport failure.
pub async fn list_by_organization(
    session: &Session,
    organization_id: i64,
    query: &PageQuery,
) -> Result<Page<ShortUrl>, ApiError> {
    http::fetch(endpoints::urls::list_by_organization(session, organization_id, query)).await
}

/// # Errors
///
/// Classified backend or transport failure.
pub async fn create(session: &Session, body: &CreateUrlRequest) -> Result<ShortUrl, ApiError> {
    http::fetch(endpoints::urls::create(session, body)).await
}

/// # Errors
///
/// Classified backend or transport failure.
pub async fn update(session: &Session, id: i64, body: &UpdateUrlRequest) -> Result<ShortUrl, ApiError> {
    http::fetch(endpoints::urls::update(session, id, body)).await
}

/// # Errors
///
/// Classified backend or transport failure.
pub async fn delete(session: &Session, id: i64) -> Result<(), ApiError> {
    http::fetch_ack(endpoints::urls::delete(session, id)).await.map(|_| ())
}
