//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <div class="home-page">
            <h1>"Shortlink"</h1>
            <p class="home-page__tagline">"Shorten, organize, and track your links by organization."</p>
            <Show
                when=move || auth.phase().is_authenticated()
                fallback=|| {
                    view! {
                        <div class="home-page__actions">
                            <A href="/login" attr:class="btn btn--primary">"Sign In"</A>
                            <A href="/signup" attr:class="btn btn--secondary">"Create Account"</A>
                        </div>
                    }
                }
            >
                <div class="home-page__actions">
                    <A href="/dashboard" attr:class="btn btn--primary">"Go to Dashboard"</A>
                </div>
            </Show>
        </div>
    }
}
