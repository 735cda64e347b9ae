//! Organizations page: every organization the user belongs to.

use leptos::prelude::*;
use leptos_router::components::A;
use shortlink::pagination::Pager;
use shortlink::{Organization, PageQuery};

use crate::components::page_header::PageHeader;
use crate::components::pagination::Pagination;
use crate::state::auth::AuthContext;

pub const ORGANIZATIONS_LOAD_FAILED: &str = "Failed to load organizations. Please try again.";

#[component]
pub fn OrganizationsPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let current_page = RwSignal::new(0_u32);
    let organizations = RwSignal::new(Vec::<Organization>::new());
    let pager = RwSignal::new(Pager::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let page = current_page.get();
        let Some(session) = auth.session_untracked() else {
            return;
        };
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::organizations::list(&session, &PageQuery::page(page)).await {
                Ok(result) => {
                    if let Some(last) = Pager::step_back(&result, page) {
                        current_page.set(last);
                        return;
                    }
                    pager.set(Pager::for_page(&result, page));
                    organizations.set(result.content);
                }
                Err(e) => {
                    log::warn!("failed to load organizations page {page}: {e}");
                    auth.observe(&e);
                    error.set(Some(e.user_message(ORGANIZATIONS_LOAD_FAILED)));
                    organizations.set(Vec::new());
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, PageQuery::page(page));
    });

    view! {
        <div class="page">
            <PageHeader title="Organizations" back="/dashboard"/>
            <div class="page__toolbar">
                <A href="/create-organization" attr:class="btn btn--primary">"Create Organization"</A>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <div class="loading-screen">"Loading..."</div> }>
                <Show
                    when=move || organizations.with(|o| !o.is_empty())
                    fallback=|| view! { <p class="empty">"No organizations yet."</p> }
                >
                    <div class="card-grid">
                        {move || {
                            organizations
                                .get()
                                .into_iter()
                                .map(|org| {
                                    view! {
                                        <A href=format!("/organizations/{}", org.id) attr:class="nav-card">
                                            <h3>{org.name}</h3>
                                            <p>{org.description.unwrap_or_default()}</p>
                                            <ul class="nav-card__facts">
                                                <li>{format!("Members: {}", org.member_count)}</li>
                                                <li>{format!("URLs: {}", org.url_count)}</li>
                                            </ul>
                                        </A>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
            <Pagination pager=pager on_page=move |index| current_page.set(index)/>
        </div>
    }
}
