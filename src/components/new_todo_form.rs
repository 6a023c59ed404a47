//! New Todo Form Component
//!
//! Text input that appends a todo on submit.

use leptos::prelude::*;

use crate::store::{store_add_todo, use_app_store, AppStateStoreFields};
use crate::style;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // blank input is ignored and left in place
        if store_add_todo(&store, &new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <div class=move || style::panel_class(store.theme().get())>
                <div class="new-todo-row">
                    <span class="check-btn placeholder"></span>
                    <input
                        type="text"
                        class="new-todo-input"
                        placeholder="Create a new todo..."
                        prop:value=move || new_text.get()
                        on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    />
                </div>
            </div>
        </form>
    }
}
