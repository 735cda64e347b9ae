//! Sign-up page: account registration.

use leptos::prelude::*;
use leptos_router::components::A;
use shortlink::signup::SIGNUP_FAILED_MESSAGE;
use shortlink::validation::SignupForm;

use crate::state::auth::AuthContext;

pub const SIGNUP_UNREACHABLE_MESSAGE: &str = "Unable to reach the server. Please try again.";

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    // (success, text)
    let message = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignupForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(e) => {
                message.set(Some((false, e.user_message(SIGNUP_FAILED_MESSAGE))));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.signup(&fields).await {
                Ok(outcome) => {
                    if outcome.success {
                        password.set(String::new());
                        confirm_password.set(String::new());
                    }
                    message.set(Some((outcome.success, outcome.message)));
                }
                Err(e) => {
                    log::warn!("signup failed: {e}");
                    message.set(Some((false, SIGNUP_UNREACHABLE_MESSAGE.to_owned())));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (fields, auth);
    };

    let text_input = move |placeholder: &'static str, kind: &'static str, signal: RwSignal<String>| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {text_input("First name", "text", first_name)}
                    {text_input("Last name", "text", last_name)}
                    {text_input("you@example.com", "email", email)}
                    {text_input("Password (min 6 characters)", "password", password)}
                    {text_input("Confirm password", "password", confirm_password)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                {move || {
                    message
                        .get()
                        .map(|(success, text)| {
                            let class = if success { "form-success" } else { "form-error" };
                            view! {
                                <p class=class>{text}</p>
                                <Show when=move || success>
                                    <A href="/login">"Go to login"</A>
                                </Show>
                            }
                        })
                }}
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
