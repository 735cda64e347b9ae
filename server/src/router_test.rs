use std::net::SocketAddr;

use axum::Json;
use axum::http::{HeaderMap, Uri};
use axum::routing::post;
use serde_json::{Value, json};

use super::*;
use crate::config::ServerConfig;

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn state_for(backend_url: String) -> AppState {
    AppState::new(ServerConfig { port: 0, backend_url, proxy_timeout_secs: 5, proxy_connect_timeout_secs: 1 })
        .unwrap()
}

fn mock_backend() -> Router {
    Router::new()
        .route(
            "/api/urls/my-urls",
            get(|headers: HeaderMap, uri: Uri| async move {
                let auth = headers.get("authorization").and_then(|v| v.to_str().ok()).unwrap_or_default().to_string();
                Json(json!({ "success": true, "data": { "auth": auth, "query": uri.query() } }))
            }),
        )
        .route(
            "/api/auth/signin",
            post(|body: String| async move {
                (StatusCode::UNAUTHORIZED, Json(json!({ "success": false, "message": format!("rejected {body}") })))
            }),
        )
}

#[tokio::test]
async fn proxy_forwards_query_and_authorization() {
    let backend = spawn(mock_backend()).await;
    let proxy = spawn(api_routes(state_for(format!("http://{backend}")))).await;

    let resp = reqwest::Client::new()
        .get(format!("http://{proxy}/api/urls/my-urls?page=1&size=10"))
        .header("Authorization", "Bearer t0k3n")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["auth"], "Bearer t0k3n");
    assert_eq!(body["data"]["query"], "page=1&size=10");
}

#[tokio::test]
async fn proxy_relays_backend_status_and_body() {
    let backend = spawn(mock_backend()).await;
    let proxy = spawn(api_routes(state_for(format!("http://{backend}")))).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{proxy}/api/auth/signin"))
        .body("creds")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "rejected creds");
}

#[tokio::test]
async fn unreachable_backend_answers_bad_gateway_envelope() {
    let closed = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = closed.local_addr().unwrap();
    drop(closed);
    let proxy = spawn(api_routes(state_for(format!("http://{addr}")))).await;

    let resp = reqwest::get(format!("http://{proxy}/api/organizations")).await.unwrap();
    assert_eq!(resp.status(), 502);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Backend unavailable");
}

#[tokio::test]
async fn healthz_is_ok() {
    let proxy = spawn(api_routes(state_for("http://127.0.0.1:9".to_string()))).await;
    let resp = reqwest::get(format!("http://{proxy}/healthz")).await.unwrap();
    assert_eq!(resp.status(), 200);
}
