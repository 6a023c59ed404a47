//! Header Component
//!
//! App title and the light/dark switch.

use leptos::prelude::*;

use crate::store::{store_toggle_theme, use_app_store, AppStateStoreFields};
use crate::style;

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="header">
            <h1 class="title">"TODO"</h1>
            <button class="theme-btn" on:click=move |_| store_toggle_theme(&store)>
                {move || {
                    let (src, alt) = style::theme_icon(store.theme().get());
                    view! { <img src=src width="20" height="20" alt=alt /> }
                }}
            </button>
        </div>
    }
}
