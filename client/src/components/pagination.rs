//! Prev / numbered / next page controls.

use leptos::prelude::*;
use shortlink::pagination::Pager;

/// Page navigation driven by a [`Pager`]. `on_page` receives the zero-based
/// index to fetch; it is never called for the current page.
#[component]
pub fn Pagination(#[prop(into)] pager: Signal<Pager>, #[prop(into)] on_page: Callback<u32>) -> impl IntoView {
    view! {
        <Show when=move || { pager.get().total_pages > 1 }>
            <nav class="pagination">
                <button
                    class="pagination__button"
                    disabled=move || !pager.get().has_prev()
                    on:click=move |_| {
                        if let Some(index) = pager.get_untracked().prev() {
                            on_page.run(index);
                        }
                    }
                >
                    "Previous"
                </button>
                {move || {
                    let current = pager.get();
                    current
                        .page_indexes()
                        .into_iter()
                        .map(|index| {
                            let class = if index == current.page {
                                "pagination__button pagination__button--active"
                            } else {
                                "pagination__button"
                            };
                            view! {
                                <button
                                    class=class
                                    on:click=move |_| {
                                        if let Some(index) = pager.get_untracked().go_to(index) {
                                            on_page.run(index);
                                        }
                                    }
                                >
                                    {index + 1}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pagination__button"
                    disabled=move || !pager.get().has_next()
                    on:click=move |_| {
                        if let Some(index) = pager.get_untracked().next() {
                            on_page.run(index);
                        }
                    }
                >
                    "Next"
                </button>
                <span class="pagination__label">{move || pager.get().label()}</span>
            </nav>
        </Show>
    }
}
