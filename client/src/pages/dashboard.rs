//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the user's organizations and the URL total of the first one. A user
//! with no organization gets the required organization form before anything
//! else; creating one reloads the dashboard.

use leptos::prelude::*;
use leptos_router::components::A;
use shortlink::model::format_date;

use crate::components::dialog::Dismissal;
use crate::components::organization_form::OrganizationForm;
use crate::components::page_header::PageHeader;
use crate::components::url_form::UrlForm;
use crate::state::auth::AuthContext;
use crate::state::dashboard::{DashboardGate, DashboardState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let state = RwSignal::new(DashboardState::default());
    let show_create_url = RwSignal::new(false);

    let load = move || {
        let session = auth.session_untracked();
        state.update(|s| s.begin_load_for(session.is_some()));
        let Some(session) = session else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::dashboard::DASHBOARD_LOAD_FAILED;
            use shortlink::PageQuery;

            match crate::net::organizations::list(&session, &PageQuery::default()).await {
                Ok(page) => {
                    auth.set_organizations(page.content.clone());
                    let first = page.content.first().map(|o| o.id);
                    state.update(|s| s.apply_organizations(page));
                    let Some(first) = first else {
                        return;
                    };
                    match crate::net::urls::list_by_organization(&session, first, &PageQuery::default()).await {
                        Ok(urls) => state.update(|s| s.apply_first_organization_urls(&urls)),
                        Err(e) => {
                            log::warn!("failed to load urls for organization {first}: {e}");
                            auth.observe(&e);
                            state.update(DashboardState::skip_urls);
                        }
                    }
                }
                Err(e) => {
                    log::warn!("failed to load organizations: {e}");
                    if !auth.observe(&e) {
                        state.update(|s| s.fail(DASHBOARD_LOAD_FAILED));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    };
    Effect::new(move |_| load());

    let gate = Memo::new(move |_| state.with(DashboardState::gate));
    let welcome = move || {
        auth.session()
            .map(|s| format!("Welcome back, {}!", s.user.display_name()))
            .unwrap_or_default()
    };

    move || match gate.get() {
        DashboardGate::Loading => view! { <div class="loading-screen">"Loading dashboard..."</div> }.into_any(),
        DashboardGate::RequireOrganization => view! {
            <OrganizationForm
                dismissal=Dismissal::Required
                modal=true
                on_created=move |_| load()
                on_cancel=|()| {}
            />
        }
        .into_any(),
        DashboardGate::Failed(message) => view! {
            <div class="page">
                <PageHeader title="Dashboard"/>
                <div class="banner banner--error">
                    {message}
                    <button class="btn btn--danger" on:click=move |_| load()>
                        "Retry"
                    </button>
                </div>
            </div>
        }
        .into_any(),
        DashboardGate::Ready => view! {
            <div class="page">
                <PageHeader title="Dashboard"/>
                <p class="welcome">{welcome}</p>
                <div class="stats">
                    <div class="stat">
                        <div class="stat__number">{move || state.with(|s| s.total_urls)}</div>
                        <div class="stat__label">"Total URLs"</div>
                    </div>
                    <div class="stat">
                        <div class="stat__number">{move || state.with(|s| s.total_organizations)}</div>
                        <div class="stat__label">"Organizations"</div>
                    </div>
                </div>
                <div class="card-grid">
                    {move || state.with(organization_summary)}
                    <A href="/my-urls" attr:class="nav-card">
                        <h3>"My URLs"</h3>
                        <p>"View, edit, and manage all your shortened URLs"</p>
                    </A>
                </div>
                <div class="quick-actions">
                    <h3>"Quick Actions"</h3>
                    <button class="btn btn--primary" on:click=move |_| show_create_url.set(true)>
                        "Create New Short URL"
                    </button>
                    <A href="/create-organization" attr:class="btn btn--secondary">"Create Organization"</A>
                </div>
                <Show when=move || show_create_url.get()>
                    <UrlForm
                        dismissal=Dismissal::Optional
                        modal=true
                        on_created=move |_| {
                            show_create_url.set(false);
                            load();
                        }
                        on_cancel=move |()| show_create_url.set(false)
                    />
                </Show>
            </div>
        }
        .into_any(),
    }
}

fn organization_summary(state: &DashboardState) -> impl IntoView + use<> {
    let more = state.more_organizations_label();
    state.first_organization().cloned().map(|org| {
        view! {
            <A href=format!("/organizations/{}", org.id) attr:class="nav-card">
                <h3>{org.name.clone()}</h3>
                <p>{org.description.clone().unwrap_or_else(|| "No description available".to_owned())}</p>
                <ul class="nav-card__facts">
                    <li>{format!("Members: {}", org.member_count)}</li>
                    <li>{format!("URLs: {}", org.url_count)}</li>
                    <li>{format!("Owner: {}", org.owner_name.clone().unwrap_or_else(|| "Unknown".to_owned()))}</li>
                    <li>{format!("Created: {}", format_date(org.created_at.as_deref()))}</li>
                </ul>
                {more.clone().map(|label| view! { <p class="nav-card__more">{label}</p> })}
            </A>
        }
    })
}
