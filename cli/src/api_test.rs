use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use shortlink::validation::UrlForm;
use shortlink::{ApiError, Session, ShortUrl, User};
use tokio::sync::Mutex;

use super::*;

const TOKEN: &str = "test-token";

#[derive(Clone, Default)]
struct Backend {
    urls: Arc<Mutex<Vec<Value>>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "success": false, "message": "Authentication required" })))
}

async fn create_url(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut urls = backend.urls.lock().await;
    let id = i64::try_from(urls.len()).unwrap_or_default() + 1;
    let code = body["customShortCode"].as_str().map_or_else(|| format!("gen{id}"), str::to_owned);
    let url = json!({
        "id": id,
        "originalUrl": body["originalUrl"],
        "shortUrl": format!("http://sho.rt/{code}"),
        "shortCode": code,
        "title": body["title"],
        "organizationId": body["organizationId"],
        "clickCount": 0,
        "active": true,
    });
    urls.push(url.clone());
    (StatusCode::CREATED, Json(json!({ "success": true, "message": "URL created", "data": url })))
}

async fn get_url(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    let urls = backend.urls.lock().await;
    match urls.iter().find(|u| u["id"] == json!(id)) {
        Some(url) => (StatusCode::OK, Json(json!({ "success": true, "data": url }))),
        None => (StatusCode::NOT_FOUND, Json(json!({ "success": false, "message": "URL not found" }))),
    }
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/urls", post(create_url))
        .route("/api/urls/{id}", get(get_url))
        .with_state(Backend::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn session(token: &str) -> Session {
    Session {
        token: token.to_owned(),
        user: User { id: 1, first_name: "Ada".to_owned(), last_name: "Lovelace".to_owned(), email: "ada@x.io".to_owned() },
        organizations: Vec::new(),
    }
}

#[test]
fn new_rejects_base_url_without_scheme() {
    assert!(matches!(ApiClient::new("localhost:8080"), Err(CliError::InvalidBaseUrl(_))));
    assert!(matches!(ApiClient::new("http://[::1"), Err(CliError::InvalidBaseUrl(_))));
    assert!(ApiClient::new("http://localhost:8080/").is_ok());
}

#[tokio::test]
async fn create_with_custom_code_then_get_by_id() {
    let api = ApiClient::new(&spawn_backend().await).unwrap();
    let session = session(TOKEN);
    let body = UrlForm {
        organization_id: Some(3),
        original_url: "https://example.com/docs".to_owned(),
        custom_short_code: "docs".to_owned(),
        title: "Docs".to_owned(),
        ..UrlForm::default()
    }
    .validate()
    .unwrap();

    let created: ShortUrl = api.fetch(shortlink::endpoints::urls::create(&session, &body)).await.unwrap();
    assert_eq!(created.short_code, "docs");

    let fetched: ShortUrl = api.fetch(shortlink::endpoints::urls::get(&session, created.id)).await.unwrap();
    assert_eq!(fetched.original_url, "https://example.com/docs");
    assert_eq!(fetched.short_url, "http://sho.rt/docs");
    assert_eq!(fetched.organization_id, Some(3));
    assert_eq!(fetched.title.as_deref(), Some("Docs"));
}

#[tokio::test]
async fn missing_url_is_a_business_error() {
    let api = ApiClient::new(&spawn_backend().await).unwrap();
    let result: Result<ShortUrl, CliError> = api.fetch(shortlink::endpoints::urls::get(&session(TOKEN), 99)).await;
    match result {
        Err(CliError::Api(ApiError::Business { status, message })) => {
            assert_eq!(status, 404);
            assert_eq!(message, "URL not found");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn rejected_token_is_unauthorized() {
    let api = ApiClient::new(&spawn_backend().await).unwrap();
    let result: Result<ShortUrl, CliError> = api.fetch(shortlink::endpoints::urls::get(&session("stale"), 1)).await;
    assert!(matches!(result, Err(CliError::Api(error)) if error.is_unauthorized()));
}
