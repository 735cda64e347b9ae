//! Modal dialog frame shared by the create forms.

use leptos::prelude::*;

/// Whether the user may close a form without completing it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dismissal {
    /// No cancel action and the backdrop does not close the dialog.
    Required,
    #[default]
    Optional,
}

impl Dismissal {
    pub fn allows_cancel(self) -> bool {
        self == Self::Optional
    }
}

/// Backdrop plus centered card. Backdrop clicks call `on_dismiss` only when
/// `dismissal` allows it.
#[component]
pub fn Dialog(dismissal: Dismissal, #[prop(into)] on_dismiss: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div
            class="dialog-backdrop"
            on:click=move |_| {
                if dismissal.allows_cancel() {
                    on_dismiss.run(());
                }
            }
        >
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
