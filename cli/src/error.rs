use shortlink::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not logged in; run `shortlink login` first")]
    NotLoggedIn,
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("sign-up refused: {0}")]
    SignupRefused(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
