//! My URLs page: paginated list of the user's short URLs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Refetches whenever the page index changes or a card reports an edit or
//! delete. Page size is the shared default (10). A page left empty by a
//! delete steps back to the new last page.

#[cfg(test)]
#[path = "my_urls_test.rs"]
mod my_urls_test;

use leptos::prelude::*;
use shortlink::ShortUrl;
use shortlink::pagination::Pager;

use crate::components::dialog::Dismissal;
use crate::components::page_header::PageHeader;
use crate::components::pagination::Pagination;
use crate::components::url_card::UrlCard;
use crate::components::url_form::UrlForm;
use crate::state::auth::AuthContext;

pub const FETCH_URLS_FAILED: &str = "Failed to fetch URLs. Please try again.";

/// "Showing N of M URLs" caption for the current page.
pub fn showing_label(on_page: usize, pager: &Pager) -> String {
    format!("Showing {on_page} of {} URLs", pager.total_elements)
}

#[component]
pub fn MyUrlsPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let current_page = RwSignal::new(0_u32);
    let reload = RwSignal::new(0_u32);
    let urls = RwSignal::new(Vec::<ShortUrl>::new());
    let pager = RwSignal::new(Pager::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let show_create_url = RwSignal::new(false);

    Effect::new(move |_| {
        let page = current_page.get();
        reload.track();
        let Some(session) = auth.session_untracked() else {
            return;
        };
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::urls::list_mine(&session, &shortlink::PageQuery::page(page)).await {
                Ok(result) => {
                    if let Some(last) = Pager::step_back(&result, page) {
                        current_page.set(last);
                        return;
                    }
                    pager.set(Pager::for_page(&result, page));
                    urls.set(result.content);
                }
                Err(e) => {
                    log::warn!("failed to load my urls page {page}: {e}");
                    auth.observe(&e);
                    error.set(Some(e.user_message(FETCH_URLS_FAILED)));
                    urls.set(Vec::new());
                    pager.set(Pager::default());
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, page);
    });

    let refresh = Callback::new(move |()| reload.update(|n| *n += 1));

    view! {
        <div class="page">
            <PageHeader title="My URLs" back="/dashboard"/>
            <div class="page__toolbar">
                <button class="btn btn--primary" on:click=move |_| show_create_url.set(true)>
                    "Create New Short URL"
                </button>
                <span class="page__summary">{move || urls.with(|u| showing_label(u.len(), &pager.get()))}</span>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <div class="loading-screen">"Loading your URLs..."</div> }>
                <Show
                    when=move || urls.with(|u| !u.is_empty())
                    fallback=|| view! { <p class="empty">"No URLs found. Create your first shortened URL!"</p> }
                >
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
            <Pagination pager=pager on_page=move |index| current_page.set(index)/>
            <Show when=move || show_create_url.get()>
                <UrlForm
                    dismissal=Dismissal::Optional
                    modal=true
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
