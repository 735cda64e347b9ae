//! One short URL with copy, inline edit, and delete actions.

#[cfg(test)]
#[path = "url_card_test.rs"]
mod url_card_test;

use leptos::prelude::*;
use shortlink::model::format_date;
use shortlink::validation::validate_url_edit;
use shortlink::{ShortUrl, UpdateUrlRequest};

use crate::state::auth::AuthContext;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this URL?";
pub const UPDATE_URL_FAILED: &str = "Failed to update URL. Please try again.";
pub const DELETE_URL_FAILED: &str = "Failed to delete URL. Please try again.";

/// Which of the two addresses a copy button puts on the clipboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyTarget {
    Short,
    Original,
}

impl CopyTarget {
    pub fn value(self, url: &ShortUrl) -> &str {
        match self {
            Self::Short => &url.short_url,
            Self::Original => &url.original_url,
        }
    }

    pub fn copied_label(self) -> &'static str {
        match self {
            Self::Short => "Shortened URL copied!",
            Self::Original => "Original URL copied!",
        }
    }
}

/// Heading for a URL card; falls back to the short code.
pub fn display_title(url: &ShortUrl) -> String {
    url.title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map_or_else(|| format!("/{}", url.short_code), str::to_owned)
}

#[component]
pub fn UrlCard(url: ShortUrl, #[prop(into)] on_changed: Callback<()>) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let url = StoredValue::new(url);
    let editing = RwSignal::new(false);
    let edit_title = RwSignal::new(String::new());
    let edit_original = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let copied = RwSignal::new(None::<CopyTarget>);
    let busy = RwSignal::new(false);

    let start_edit = move |_| {
        url.with_value(|u| {
            edit_title.set(u.title.clone().unwrap_or_default());
            edit_original.set(u.original_url.clone());
        });
        error.set(None);
        editing.set(true);
    };

    let save_edit = move |_| {
        let (title, original_url) = match validate_url_edit(&edit_title.get_untracked(), &edit_original.get_untracked()) {
            Ok(fields) => fields,
            Err(e) => {
                error.set(Some(e.user_message(UPDATE_URL_FAILED)));
                return;
            }
        };
        let Some(session) = auth.session_untracked() else {
            return;
        };
        let (id, body) = url.with_value(|u| (u.id, UpdateUrlRequest::edit(u, &title, &original_url)));
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::urls::update(&session, id, &body).await {
                Ok(_) => {
                    editing.set(false);
                    on_changed.run(());
                }
                Err(e) => {
                    log::warn!("failed to update url {id}: {e}");
                    auth.observe(&e);
                    error.set(Some(e.user_message(UPDATE_URL_FAILED)));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, id, body, on_changed);
    };

    let delete = move |_| {
        if !crate::util::browser::confirm(DELETE_CONFIRM_MESSAGE) {
            return;
        }
        let Some(session) = auth.session_untracked() else {
            return;
        };
        let id = url.with_value(|u| u.id);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::urls::delete(&session, id).await {
                Ok(()) => on_changed.run(()),
                Err(e) => {
                    log::warn!("failed to delete url {id}: {e}");
                    auth.observe(&e);
                    error.set(Some(e.user_message(DELETE_URL_FAILED)));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, id, on_changed);
    };

    let copy = move |target: CopyTarget| {
        let text = url.with_value(|u| target.value(u).to_owned());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::browser::copy_text(&text).await {
                Ok(()) => {
                    copied.set(Some(target));
                    gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                    copied.set(None);
                }
                Err(e) => log::warn!("{e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    let current = url.get_value();
    let title = display_title(&current);
    let created = format_date(current.created_at.as_deref());
    let organization = current.organization_name.clone().unwrap_or_default();
    let status = if current.active { "Active" } else { "Inactive" };

    view! {
        <article class="url-card">
            <Show
                when=move || editing.get()
                fallback=move || {
                    let u = url.get_value();
                    view! {
                        <h3 class="url-card__title">{title.clone()}</h3>
                        <div class="url-card__row">
                            <strong>"Short: "</strong>
                            <a href=u.short_url.clone() target="_blank" rel="noopener">{u.short_url.clone()}</a>
                            <button class="btn btn--icon" title="Copy short URL" on:click=move |_| copy(CopyTarget::Short)>
                                "📋"
                            </button>
                        </div>
                        <div class="url-card__row">
                            <strong>"Original: "</strong>
                            <a href=u.original_url.clone() target="_blank" rel="noopener">{u.original_url.clone()}</a>
                            <button class="btn btn--icon" title="Copy original URL" on:click=move |_| copy(CopyTarget::Original)>
                                "📋"
                            </button>
                        </div>
                    }
                }
            >
                <div class="url-card__edit">
                    <input
                        class="entity-form__input"
                        type="text"
                        placeholder="Title"
                        prop:value=move || edit_title.get()
                        on:input=move |ev| edit_title.set(event_target_value(&ev))
                    />
                    <input
                        class="entity-form__input"
                        type="url"
                        placeholder="https://example.com"
                        prop:value=move || edit_original.get()
                        on:input=move |ev| edit_original.set(event_target_value(&ev))
                    />
                    <div class="entity-form__actions">
                        <button class="btn btn--secondary" disabled=move || busy.get() on:click=move |_| editing.set(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=save_edit>
                            "Save"
                        </button>
                    </div>
                </div>
            </Show>
            <Show when=move || copied.get().is_some()>
                <p class="url-card__copied">{move || copied.get().map(CopyTarget::copied_label)}</p>
            </Show>
            <div class="url-card__meta">
                <span>{format!("Clicks: {}", current.click_count)}</span>
                <span>{format!("Created: {created}")}</span>
                <span>{status}</span>
                <span>{organization}</span>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !editing.get()>
                <div class="url-card__actions">
                    <button class="btn btn--secondary" disabled=move || busy.get() on:click=start_edit>
                        "Edit"
                    </button>
                    <button class="btn btn--danger" disabled=move || busy.get() on:click=delete>
                        "Delete"
                    </button>
                </div>
            </Show>
        </article>
    }
}
