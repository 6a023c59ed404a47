//! List Footer Component
//!
//! Remaining count, filter selector and "Clear Completed".

use leptos::prelude::*;

use crate::components::FilterButtons;
use crate::store::{store_clear_completed, use_app_store, AppStateStoreFields};
use crate::style;

#[component]
pub fn ListFooter() -> impl IntoView {
    let store = use_app_store();

    let items_left = move || store.todos().read().active_count();

    view! {
        <div class=move || style::footer_class(store.theme().get())>
            <span class="items-left">{items_left} " items left"</span>

            <FilterButtons class="filters filters-desktop" />

            <button
                class=move || style::clear_button_class(store.theme().get())
                on:click=move |_| store_clear_completed(&store)
            >
                "Clear Completed"
            </button>
        </div>
    }
}
