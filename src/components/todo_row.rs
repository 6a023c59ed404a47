//! Todo Row Component
//!
//! Toggle control, label and remove control for one todo.

use leptos::prelude::*;

use crate::store::{store_remove_todo, store_toggle_todo, use_app_store, AppStateStoreFields};
use crate::style;

/// A single todo row, read from the store by id so toggling keeps the row
/// (and its focus) in place. The buttons never start a drag; only the label area does.
#[component]
pub fn TodoRow(id: u64) -> impl IntoView {
    let store = use_app_store();

    let completed = move || store.todos().read().get(id).is_some_and(|t| t.completed);
    let text = move || store.todos().read().get(id).map(|t| t.text.clone()).unwrap_or_default();

    view! {
        <div class="todo-row-content">
            <button
                class=move || style::check_class(completed())
                aria-pressed=move || completed().to_string()
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_toggle_todo(&store, id);
                }
            >
                {move || completed().then(|| view! {
                    <img src="public/images/icon-check.svg" width="12" height="9" alt="Check Icon" />
                })}
            </button>

            <span class=move || style::text_class(store.theme().get(), completed())>{text}</span>

            <button
                class="remove-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_remove_todo(&store, id);
                }
            >
                <img src="public/images/icon-cross.svg" width="18" height="18" alt="Cross Icon" />
            </button>
        </div>
    }
}
