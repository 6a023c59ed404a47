//! Todo List View Component
//!
//! Displays the filtered todos with drag-and-drop reordering.
//! Drops are applied to the full list, not the filtered subset.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{store_reorder, use_app_store, AppStateStoreFields};
use crate::style;

use leptos_dragdrop::*;

/// Sortable todo list
#[component]
pub fn TodoListView(drag_threshold_px: i32) -> impl IntoView {
    let store = use_app_store();

    let dnd = create_dnd_signals_with_threshold::<u64>(drag_threshold_px);
    let on_drop = move |source: u64, target: u64| store_reorder(&store, source, target);

    bind_global_mouseup(dnd, on_drop);

    // Displayed id order: drives the rows and keyboard stepping
    let order = Signal::derive(move || {
        let filter = store.filter().get();
        store.todos().read().filtered_ids(filter)
    });

    bind_order_guard(dnd, order);

    view! {
        <ul class="todo-list">
            <For
                each=move || order.get()
                key=|id| *id
                children=move |id| {
                    let on_mousedown = make_on_mousedown(dnd, id);
                    let on_mouseenter = make_on_item_mouseenter(dnd, id);
                    let on_mouseleave = make_on_mouseleave(dnd);
                    let on_keydown = make_on_keydown(dnd, id, order, on_drop);
                    let on_blur = make_on_blur(dnd, id);

                    let is_dragging = move || dnd.dragging_id() == Some(id);
                    let is_drop_target = move || dnd.over_id() == Some(id);

                    view! {
                        <li
                            class=move || style::row_class(store.theme().get(), is_dragging(), is_drop_target())
                            tabindex="0"
                            aria-roledescription="sortable"
                            aria-grabbed=move || is_dragging().to_string()
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                            on:keydown=on_keydown
                            on:blur=on_blur
                        >
                            <TodoRow id=id />
                        </li>
                    }
                }
            />
        </ul>
    }
}
