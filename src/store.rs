//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! All mutations go through the helper functions below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::models::{Filter, Theme};
use crate::todos::TodoList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full todo list, the ground truth for ordering
    pub todos: TodoList,
    /// Current view restriction
    pub filter: Filter,
    pub theme: Theme,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            todos: config.seed_list(),
            filter: config.filter,
            theme: config.theme,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a todo; returns false (and changes nothing) for blank text
pub fn store_add_todo(store: &AppStore, text: &str) -> bool {
    let now_ms = js_sys::Date::now() as u64;
    let added = store.todos().write().add(text, now_ms);
    match added {
        Some(id) => {
            log::debug!(target: "store", "added todo {}", id);
            true
        }
        None => false,
    }
}

pub fn store_toggle_todo(store: &AppStore, id: u64) {
    if store.todos().write().toggle(id) {
        log::debug!(target: "store", "toggled todo {}", id);
    }
}

pub fn store_remove_todo(store: &AppStore, id: u64) {
    if store.todos().write().remove(id) {
        log::debug!(target: "store", "removed todo {}", id);
    }
}

pub fn store_clear_completed(store: &AppStore) {
    let removed = store.todos().write().clear_completed();
    log::debug!(target: "store", "cleared {} completed todos", removed);
}

/// Apply a drop from the drag coordinator to the full list
pub fn store_reorder(store: &AppStore, source: u64, target: u64) {
    if store.todos().write().reorder(source, target) {
        log::debug!(target: "store", "moved todo {} to slot of {}", source, target);
    } else {
        log::debug!(target: "store", "ignored reorder {} -> {}", source, target);
    }
}

pub fn store_set_filter(store: &AppStore, filter: Filter) {
    store.filter().set(filter);
}

pub fn store_toggle_theme(store: &AppStore) {
    store.theme().update(|theme| *theme = theme.toggled());
}
