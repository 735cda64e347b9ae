//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::use_navigate;
use shortlink::ApiError;
use shortlink::guard::LANDING_ROUTE;
use shortlink::validation::validate_login;

use crate::state::auth::AuthContext;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const LOGIN_UNREACHABLE_MESSAGE: &str = "Unable to reach the server. Please try again.";

/// Message for a failed sign-in.
///
/// A rejected sign-in is a credentials problem, not an expired session, so
/// `Unauthorized` shows the backend's text like any other refusal.
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Transport { .. } => LOGIN_UNREACHABLE_MESSAGE.to_owned(),
        ApiError::Validation(message) => message.clone(),
        ApiError::Business { .. } | ApiError::Unauthorized { .. } => {
            error.backend_message().unwrap_or(LOGIN_FAILED_MESSAGE).to_owned()
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        message.set(None);
        let (email_value, password_value) = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(fields) => fields,
            Err(e) => {
                message.set(Some(login_error_message(&e)));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = auth.login(&email_value, &password_value, navigate).await {
                    log::warn!("login failed: {e}");
                    message.set(Some(login_error_message(&e)));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, &navigate);
    };

    view! {
        <Show when=move || auth.phase().is_authenticated()>
            <Redirect path=LANDING_ROUTE/>
        </Show>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Shortlink"</h1>
                <p class="auth-card__subtitle">"Sign in to manage your links"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="auth-input-row">
                        <input
                            class="auth-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="btn btn--icon"
                            type="button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class="form-error">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
