//! Route guard wrapper for authenticated pages.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use shortlink::guard::{self, GuardDecision};

use crate::state::auth::AuthContext;

/// Render `children` only for an authenticated session.
///
/// Shows a loading screen while the persisted session is resolved and
/// redirects to the login route otherwise. Token expiry is re-checked each
/// time a protected route mounts.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    Effect::new(move |_| {
        auth.revalidate();
    });

    // Memoized so session updates that keep the decision do not rebuild the page.
    let decision = Memo::new(move |_| guard::decide(&auth.phase()));

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Loading => view! { <div class="loading-screen">"Loading..."</div> }.into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
