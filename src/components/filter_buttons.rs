//! Filter Buttons Component
//!
//! All / Active / Completed selector.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};
use crate::style;

/// Filter selector buttons
#[component]
pub fn FilterButtons(#[prop(into)] class: String) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class=class>
            {Filter::ALL.into_iter().map(|filter| {
                let is_selected = move || store.filter().get() == filter;
                view! {
                    <button
                        class=move || style::filter_button_class(store.theme().get(), is_selected())
                        on:click=move |_| store_set_filter(&store, filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
