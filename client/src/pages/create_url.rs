//! Full-page variant of the short-URL form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use shortlink::guard::LANDING_ROUTE;

use crate::components::dialog::Dismissal;
use crate::components::page_header::PageHeader;
use crate::components::url_form::UrlForm;

#[component]
pub fn CreateUrlPage() -> impl IntoView {
    let navigate = use_navigate();
    let go = Callback::new(move |path: &'static str| navigate(path, NavigateOptions::default()));

    view! {
        <div class="page">
            <PageHeader title="Create Short URL" back="/dashboard"/>
            <UrlForm
                dismissal=Dismissal::Optional
                on_created=move |_| go.run("/my-urls")
                on_cancel=move |()| go.run(LANDING_ROUTE)
            />
        </div>
    }
}
