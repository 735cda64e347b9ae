//! Create-organization form, used as a modal and as a full page.
//!
//! DESIGN
//! ======
//! One component covers every place an organization is created. The
//! dashboard mounts it as a required modal when the user has none; the
//! create-organization page mounts it inline with an optional cancel.

use leptos::prelude::*;
use shortlink::Organization;
use shortlink::validation::OrganizationForm as OrganizationInput;

use super::dialog::{Dialog, Dismissal};
use crate::state::auth::AuthContext;

pub const CREATE_ORGANIZATION_FAILED: &str = "Failed to create organization";

#[component]
pub fn OrganizationForm(
    dismissal: Dismissal,
    /// Wrap the form in a [`Dialog`].
    #[prop(optional)]
    modal: bool,
    #[prop(into)] on_created: Callback<Organization>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let name = RwSignal::new(String::new());
    let short_name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = OrganizationInput {
            name: name.get_untracked(),
            short_name: short_name.get_untracked(),
            description: description.get_untracked(),
        };
        let request = match input.validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.user_message(CREATE_ORGANIZATION_FAILED)));
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
            match crate::net::organizations::create(&session, &request).await {
                Ok(organization) => {
                    log::info!("created organization {}", organization.id);
                    on_created.run(organization);
                }
                Err(e) => {
                    auth.observe(&e);
                    error.set(Some(e.user_message(CREATE_ORGANIZATION_FAILED)));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, request, on_created);
    };

    let form = view! {
        <form class="entity-form" on:submit=on_submit>
            <h2 class="entity-form__title">"Create Organization"</h2>
            <Show when=move || !dismissal.allows_cancel()>
                <p class="entity-form__note">"Create your first organization to get started."</p>
            </Show>
            <label class="entity-form__label">
                "Organization Name *"
                <input
                    class="entity-form__input"
                    type="text"
                    placeholder="Acme Inc."
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="entity-form__label">
                "Short Name"
                <input
                    class="entity-form__input"
                    type="text"
                    placeholder="acme"
                    prop:value=move || short_name.get()
                    on:input=move |ev| short_name.set(event_target_value(&ev))
                />
            </label>
            <label class="entity-form__label">
                "Description"
                <textarea
                    class="entity-form__input"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
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
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
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
