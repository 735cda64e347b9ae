//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::pages::{
    create_organization::CreateOrganizationPage, create_url::CreateUrlPage, dashboard::DashboardPage,
    home::HomePage, login::LoginPage, my_urls::MyUrlsPage, organization_details::OrganizationDetailsPage,
    organizations::OrganizationsPage, signup::SignupPage,
};
use crate::state::auth::AuthContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing. The persisted
/// session is only read in the browser, so server-rendered protected routes
/// show the loading screen until hydration resolves the session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new();
    provide_context(auth);
    Effect::new(move |_| auth.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/shortlink.css"/>
        <Title text="Shortlink"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("organizations")
                    view=|| view! { <Protected><OrganizationsPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("organizations"), ParamSegment("id"))
                    view=|| view! { <Protected><OrganizationDetailsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("create-organization")
                    view=|| view! { <Protected><CreateOrganizationPage/></Protected> }
                />
                <Route
                    path=StaticSegment("my-urls")
                    view=|| view! { <Protected><MyUrlsPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("urls"), StaticSegment("new"))
                    view=|| view! { <Protected><CreateUrlPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
