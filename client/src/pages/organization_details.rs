//! Organization details page: facts, URL totals, and the organization's URLs.

#[cfg(test)]
#[path = "organization_details_test.rs"]
mod organization_details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use shortlink::model::format_date;
use shortlink::{Organization, ShortUrl};

use crate::components::dialog::Dismissal;
use crate::components::page_header::PageHeader;
use crate::components::url_card::UrlCard;
use crate::components::url_form::UrlForm;
use crate::state::auth::AuthContext;

pub const ORGANIZATION_LOAD_FAILED: &str = "Failed to load organization details. Please try again.";

/// Totals over the loaded URL page of an organization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UrlTotals {
    pub urls: usize,
    pub active: usize,
    pub clicks: u64,
}

impl UrlTotals {
    pub fn of(urls: &[ShortUrl]) -> Self {
        Self {
            urls: urls.len(),
            active: urls.iter().filter(|u| u.active).count(),
            clicks: urls.iter().map(|u| u.click_count).sum(),
        }
    }
}

#[component]
pub fn OrganizationDetailsPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let params = use_params_map();
    let organization_id = Memo::new(move |_| params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok())));

    let organization = RwSignal::new(None::<Organization>);
    let urls = RwSignal::new(Vec::<ShortUrl>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let show_create_url = RwSignal::new(false);
    let reload = RwSignal::new(0_u32);

    Effect::new(move |_| {
        reload.track();
        let Some(id) = organization_id.get() else {
            error.set(Some("Organization not found".to_owned()));
            loading.set(false);
            return;
        };
        let Some(session) = auth.session_untracked() else {
            return;
        };
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::organizations::get(&session, id).await {
                Ok(org) => organization.set(Some(org)),
                Err(e) => {
                    log::warn!("failed to load organization {id}: {e}");
                    auth.observe(&e);
                    error.set(Some(e.user_message(ORGANIZATION_LOAD_FAILED)));
                    loading.set(false);
                    return;
                }
            }
            match crate::net::urls::list_by_organization(&session, id, &shortlink::PageQuery::default()).await {
                Ok(page) => urls.set(page.content),
                Err(e) => {
                    log::warn!("failed to load urls for organization {id}: {e}");
                    auth.observe(&e);
                    urls.set(Vec::new());
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, id);
    });

    let refresh = Callback::new(move |()| reload.update(|n| *n += 1));
    let totals = move || urls.with(|u| UrlTotals::of(u));

    view! {
        <div class="page">
            <PageHeader title="Organization Details" back="/organizations"/>
            <Show when=move || !loading.get() fallback=|| view! { <div class="loading-screen">"Loading organization details..."</div> }>
                <Show
                    when=move || error.get().is_none()
                    fallback=move || view! { <div class="banner banner--error">{move || error.get().unwrap_or_default()}</div> }
                >
                    {move || organization.get().map(|org| view! {
                        <section class="org-info">
                            <h2>{org.name.clone()}</h2>
                            <p>{org.description.clone().unwrap_or_else(|| "No description available".to_owned())}</p>
                            <ul class="nav-card__facts">
                                <li>{format!("Short name: {}", org.short_name.clone().unwrap_or_default())}</li>
                                <li>{format!("Members: {}", org.member_count)}</li>
                                <li>{format!("Owner: {}", org.owner_name.clone().unwrap_or_else(|| "Unknown".to_owned()))}</li>
                                <li>{format!("Created: {}", format_date(org.created_at.as_deref()))}</li>
                            </ul>
                        </section>
                    })}
                    <div class="stats">
                        <div class="stat">
                            <div class="stat__number">{move || totals().urls}</div>
                            <div class="stat__label">"Total URLs"</div>
                        </div>
                        <div class="stat">
                            <div class="stat__number">{move || totals().active}</div>
                            <div class="stat__label">"Active URLs"</div>
                        </div>
                        <div class="stat">
                            <div class="stat__number">{move || totals().clicks}</div>
                            <div class="stat__label">"Total Clicks"</div>
                        </div>
                    </div>
                    <div class="page__toolbar">
                        <button class="btn btn--primary" on:click=move |_| show_create_url.set(true)>
                            "Create Short URL"
                        </button>
                    </div>
                    <div class="url-list">
                        {move || {
                            urls.get()
                                .into_iter()
                                .map(|url| view! { <UrlCard url=url on_changed=refresh/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
            <Show when=move || show_create_url.get()>
                <UrlForm
                    dismissal=Dismissal::Optional
                    modal=true
                    organization_id=organization_id.get_untracked()
                    on_created=move |_| {
                        show_create_url.set(false);
                        refresh.run(());
                    }
                    on_cancel=move |()| show_create_url.set(false)
                />
            </Show>
        </div>
    }
}
