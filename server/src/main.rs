mod config;
mod error;
mod proxy;
mod router;
mod state;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let port = config.port;
    tracing::info!(backend = %config.backend_url, "proxying /api to backend");

    let state = AppState::new(config)?;
    let app = router::app(state)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(%port, "shortlink listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
