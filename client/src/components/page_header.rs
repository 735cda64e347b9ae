//! Page header with title, navigation links, and logout.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;

#[component]
pub fn PageHeader(#[prop(into)] title: String, #[prop(optional, into)] back: Option<String>) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let on_logout = move |_| auth.logout(&navigate);

    view! {
        <header class="page-header">
            <div class="page-header__left">
                {back.map(|href| view! { <A href=href attr:class="page-header__back">"← Back"</A> })}
                <h2 class="page-header__title">{title}</h2>
            </div>
            <nav class="page-header__nav">
                <A href="/dashboard">"Dashboard"</A>
                <A href="/organizations">"Organizations"</A>
                <A href="/my-urls">"My URLs"</A>
                <button class="btn btn--danger" on:click=on_logout>
                    "Logout"
                </button>
            </nav>
        </header>
    }
}
