//! Full-page variant of the organization form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use shortlink::guard::LANDING_ROUTE;

use crate::components::dialog::Dismissal;
use crate::components::organization_form::OrganizationForm;
use crate::components::page_header::PageHeader;

#[component]
pub fn CreateOrganizationPage() -> impl IntoView {
    let navigate = use_navigate();
    let done = Callback::new(move |()| navigate(LANDING_ROUTE, NavigateOptions::default()));

    view! {
        <div class="page">
            <PageHeader title="Create Organization" back="/dashboard"/>
            <OrganizationForm
                dismissal=Dismissal::Optional
                on_created=move |_| done.run(())
                on_cancel=done
            />
        </div>
    }
}
