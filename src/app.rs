//! Todo App
//!
//! Root component: loads config, owns the store, lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterButtons, Header, ListFooter, NewTodoForm, TodoListView};
use crate::config::AppConfig;
use crate::store::{AppState, AppStateStoreFields};
use crate::style;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load().unwrap_or_else(|err| {
        log::error!(target: "config", "{}, starting with an empty list", err);
        AppConfig::default()
    });

    // State
    let store = Store::new(AppState::from_config(&config));
    provide_context(store);

    log::info!(
        target: "app",
        "mounted with {} todos, theme={:?}, filter={:?}",
        store.todos().read_untracked().len(),
        config.theme,
        config.filter,
    );

    // Mirror the theme onto <body> so the page background follows it
    Effect::new(move |_| {
        let dark = store.theme().get().is_dark();
        if let Some(body) = document().body() {
            let _ = body.class_list().toggle_with_force("dark-mode", dark);
        }
    });

    let theme = move || store.theme().get();

    view! {
        <div class=move || style::page_class(theme())>
            <div class="banner">
                <img class="banner-img" src=move || style::banner_image(theme()) alt="Background Image" />
            </div>

            <main class="container">
                <Header />

                <NewTodoForm />

                <div class=move || style::panel_class(theme())>
                    <TodoListView drag_threshold_px=config.drag_threshold_px />
                    <ListFooter />
                </div>

                // Narrow screens get the filters in their own card
                <div class=move || style::panel_class(theme())>
                    <FilterButtons class="filters filters-mobile" />
                </div>

                <p class="dnd-hint">"Drag and drop to reorder list"</p>
            </main>
        </div>
    }
}
