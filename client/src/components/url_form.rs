//! Create-short-URL form, used as a modal and as a full page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the user's organizations on mount so the URL can be filed under
//! one. Users without an organization are pointed at the organization form
//! instead of being allowed to submit.

#[cfg(test)]
#[path = "url_form_test.rs"]
mod url_form_test;

use leptos::prelude::*;
use leptos_router::components::A;
use shortlink::validation::UrlForm as UrlInput;
use shortlink::{Organization, ShortUrl};

use super::dialog::{Dialog, Dismissal};
use crate::state::auth::AuthContext;

pub const CREATE_URL_FAILED: &str = "Failed to create short URL. Please try again.";

/// Organization preselected in the form: `preset` when the user belongs to
/// it, otherwise the first one listed.
pub fn initial_organization(organizations: &[Organization], preset: Option<i64>) -> Option<i64> {
    preset
        .filter(|id| organizations.iter().any(|o| o.id == *id))
        .or_else(|| organizations.first().map(|o| o.id))
}

#[component]
pub fn UrlForm(
    dismissal: Dismissal,
    #[prop(optional)] modal: bool,
    /// Organization to preselect, e.g. from the organization details page.
    #[prop(default = None)]
    organization_id: Option<i64>,
    #[prop(into)] on_created: Callback<ShortUrl>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let organizations = RwSignal::new(None::<Vec<Organization>>);
    let selected = RwSignal::new(organization_id);
    let original_url = RwSignal::new(String::new());
    let custom_code = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let expires_at = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    if let Some(session) = auth.session_untracked() {
        leptos::task::spawn_local(async move {
            let query = shortlink::PageQuery { size: 100, ..shortlink::PageQuery::default() };
            match crate::net::organizations::list(&session, &query).await {
                Ok(page) => {
                    selected.set(initial_organization(&page.content, organization_id));
                    organizations.set(Some(page.content));
                }
                Err(e) => {
                    log::warn!("failed to load organizations: {e}");
                    auth.observe(&e);
                    organizations.set(Some(Vec::new()));
                }
            }
        });
    }

    let no_organizations = move || organizations.get().is_some_and(|orgs| orgs.is_empty());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = UrlInput {
            organization_id: selected.get_untracked(),
            original_url: original_url.get_untracked(),
            custom_short_code: custom_code.get_untracked(),
            title: title.get_untracked(),
            description: description.get_untracked(),
            expires_at: expires_at.get_untracked(),
        };
        let request = match input.validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.user_message(CREATE_URL_FAILED)));
                return;
            }
        };
        let Some(session) = auth.session_untracked() else {
            return;
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::urls::create(&session, &request).await {
                Ok(url) => {
                    log::info!("created short url {}", url.short_code);
                    on_created.run(url);
                }
                Err(e) => {
                    auth.observe(&e);
                    error.set(Some(e.user_message(CREATE_URL_FAILED)));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, request, on_created);
    };

    let form = view! {
        <form class="entity-form" on:submit=on_submit>
            <h2 class="entity-form__title">"Create New Short URL"</h2>
            <Show when=no_organizations>
                <p class="entity-form__note">
                    "You need an organization before creating short URLs. "
                    <A href="/create-organization">"Create one"</A>
                </p>
            </Show>
            <label class="entity-form__label">
                "Organization *"
                <select
                    class="entity-form__input"
                    prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
                    on:change=move |ev| selected.set(event_target_value(&ev).parse().ok())
                >
                    {move || {
                        organizations
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|org| view! { <option value=org.id.to_string()>{org.name}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <label class="entity-form__label">
                "Original URL *"
                <input
                    class="entity-form__input"
                    type="url"
                    placeholder="https://example.com"
                    prop:value=move || original_url.get()
                    on:input=move |ev| original_url.set(event_target_value(&ev))
                />
            </label>
            <label class="entity-form__label">
                "Custom Short Code (optional)"
                <input
                    class="entity-form__input"
                    type="text"
                    placeholder="e.g. my-custom-link"
                    prop:value=move || custom_code.get()
                    on:input=move |ev| custom_code.set(event_target_value(&ev))
                />
            </label>
            <label class="entity-form__label">
                "Title (optional)"
                <input
                    class="entity-form__input"
                    type="text"
                    placeholder="My URL Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="entity-form__label">
                "Description (optional)"
                <textarea
                    class="entity-form__input"
                    rows="3"
                    placeholder="URL description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="entity-form__label">
                "Expiration Date (optional)"
                <input
                    class="entity-form__input"
                    type="datetime-local"
                    prop:value=move || expires_at.get()
                    on:input=move |ev| expires_at.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="entity-form__actions">
                <Show when=move || dismissal.allows_cancel()>
                    <button
                        class="btn btn--secondary"
                        type="button"
                        disabled=move || busy.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                </Show>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || busy.get() || no_organizations()
                >
                    {move || if busy.get() { "Creating..." } else { "Create" }}
                </button>
            </div>
        </form>
    };

    if modal {
        view! { <Dialog dismissal=dismissal on_dismiss=on_cancel>{form}</Dialog> }.into_any()
    } else {
        view! { <div class="page-card">{form}</div> }.into_any()
    }
}
