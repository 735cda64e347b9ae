//! Sign-in and sign-up calls.

use shortlink::signup::{SignupOutcome, signup_outcome};
use shortlink::validation::SignupFields;
use shortlink::{ApiError, Session, SignInResponse, endpoints};

use super::http;

/// Exchange credentials for a [`Session`].
///
/// # Errors
///
/// Rejected credentials come back as `Business` or `Unauthorized`;
/// network failures as `Transport`.
pub async fn signin(email: &str, password: &str) -> Result<Session, ApiError> {
    let response: SignInResponse = http::fetch(endpoints::auth::signin(email, password)).await?;
    Ok(Session::from(response))
}

/// Register a new account.
///
/// # Errors
///
/// Only when the backend could not be reached or gave no usable answer; a
/// refused registration is an `Ok` outcome with `success: false`.
pub async fn signup(fields: &SignupFields) -> Result<SignupOutcome, ApiError> {
    let request = endpoints::auth::signup(&fields.first_name, &fields.last_name, &fields.email, &fields.password);
    let (status, body) = http::send(&request).await?;
    signup_outcome(status, &body)
}
