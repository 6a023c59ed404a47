//! Leptos DragDrop Utilities
//!
//! Drag-to-reorder for flat sortable lists, driven by mouse and keyboard.
//! Uses a movement threshold to distinguish click from drag.
//!
//! The list owner supplies the displayed id order and a drop callback
//! `Fn(source, target)`; this crate never touches the list itself.

mod gesture;

pub use gesture::{array_move, DragKey, Gesture, Reorder, Step};

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Default movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<K: DragKey> {
    pub gesture_read: ReadSignal<Gesture<K>>,
    pub gesture_write: WriteSignal<Gesture<K>>,
    /// Pointer travel needed before a press becomes a drag
    pub threshold_px: i32,
}

impl<K: DragKey> DndSignals<K> {
    /// Row being dragged (tracked)
    pub fn dragging_id(&self) -> Option<K> {
        self.gesture_read.with(|g| g.dragging_id())
    }

    /// Row the dragged row is over (tracked)
    pub fn over_id(&self) -> Option<K> {
        self.gesture_read.with(|g| g.over_id())
    }

    /// Apply a transition and return its result
    fn apply<R: Default>(&self, f: impl FnOnce(&mut Gesture<K>) -> R) -> R {
        // disposed signal: nothing to transition
        self.gesture_write.try_update(f).unwrap_or_default()
    }
}

pub fn create_dnd_signals_with_threshold<K: DragKey>(threshold_px: i32) -> DndSignals<K> {
    let (gesture_read, gesture_write) = signal(Gesture::<K>::Idle);
    DndSignals {
        gesture_read,
        gesture_write,
        threshold_px: threshold_px.max(0),
    }
}

/// True if the event started on a button or input (or inside one).
/// Those controls keep their own click semantics and never start a drag.
fn starts_on_control(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("button, input").ok().flatten())
        .is_some()
}

/// End the gesture and hand a valid drop to `on_drop`
fn finish<K: DragKey, F: Fn(K, K)>(dnd: &DndSignals<K>, on_drop: &F) {
    if let Some(Reorder { source, target }) = dnd.apply(|g| g.release()) {
        log::debug!(target: "dnd", "drop {:?} over {:?}", source, target);
        on_drop(source, target);
    } else {
        log::debug!(target: "dnd", "gesture cancelled");
    }
}

/// Create mousedown handler for draggable rows.
/// Records a pending drag with start position.
pub fn make_on_mousedown<K: DragKey>(dnd: DndSignals<K>, item_id: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || starts_on_control(&ev) {
            return;
        }
        if dnd.gesture_read.with_untracked(|g| g.is_idle()) {
            let (x, y) = (ev.client_x(), ev.client_y());
            dnd.apply(|g| g.press(item_id, x, y));
        }
    }
}

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_item_mouseenter<K: DragKey>(dnd: DndSignals<K>, item_id: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.gesture_read.with_untracked(|g| g.is_dragging() && !g.is_keyboard());
        if dragging {
            dnd.apply(|g| g.enter(item_id));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K: DragKey>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.gesture_read.with_untracked(|g| g.is_dragging() && !g.is_keyboard());
        if dragging {
            dnd.apply(|g| g.leave());
        }
    }
}

/// Create keydown handler for focusable rows.
///
/// Space/Enter picks the row up and drops it, ArrowUp/ArrowDown move the
/// target through `order` (the ids as currently displayed). Escape is
/// handled by the document listener from `bind_global_mouseup`.
pub fn make_on_keydown<K, F>(
    dnd: DndSignals<K>,
    item_id: K,
    order: Signal<Vec<K>>,
    on_drop: F,
) -> impl Fn(web_sys::KeyboardEvent) + Clone + 'static
where
    K: DragKey,
    F: Fn(K, K) + Clone + 'static,
{
    move |ev: web_sys::KeyboardEvent| {
        if starts_on_control(&ev) {
            return;
        }
        let keyboard_drag = dnd.gesture_read.with_untracked(|g| g.is_keyboard());
        match ev.key().as_str() {
            " " | "Enter" => {
                ev.prevent_default();
                if keyboard_drag {
                    finish(&dnd, &on_drop);
                } else if dnd.apply(|g| g.pick_up(item_id)) {
                    log::debug!(target: "dnd", "keyboard pickup {:?}", item_id);
                }
            }
            "ArrowUp" | "ArrowDown" if keyboard_drag => {
                ev.prevent_default();
                let step = if ev.key() == "ArrowUp" { Step::Up } else { Step::Down };
                let ids = order.get_untracked();
                dnd.apply(|g| g.step(&ids, step));
            }
            _ => {}
        }
    }
}

/// Create blur handler for focusable rows.
/// A keyboard gesture ends when its row loses focus.
pub fn make_on_blur<K: DragKey>(dnd: DndSignals<K>, item_id: K) -> impl Fn(web_sys::FocusEvent) + Copy + 'static {
    move |_ev: web_sys::FocusEvent| {
        let owns_gesture = dnd.gesture_read.with_untracked(|g| g.is_keyboard() && g.dragging_id() == Some(item_id));
        if owns_gesture {
            dnd.apply(|g| g.blur(item_id));
            log::debug!(target: "dnd", "keyboard gesture cancelled, {:?} lost focus", item_id);
        }
    }
}

/// Cancel the running gesture whenever its row or target leaves `order`
/// (filtered out, removed, or cleared).
pub fn bind_order_guard<K: DragKey>(dnd: DndSignals<K>, order: Signal<Vec<K>>) {
    Effect::new(move |_| {
        let ids = order.get();
        // check on a copy so an idle or still-valid gesture never notifies
        let mut current = dnd.gesture_read.get_untracked();
        if current.cancel_if_missing(&ids) {
            dnd.apply(|g| g.cancel());
            log::debug!(target: "dnd", "gesture cancelled, row no longer displayed");
        }
    });
}

/// Create mousemove handler for document - starts drag if moved enough
fn bind_global_mousemove<K: DragKey>(doc: &web_sys::Document, dnd: DndSignals<K>) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.gesture_read.with_untracked(|g| matches!(g, Gesture::Pending { .. }));
        if !pending {
            return;
        }
        let (x, y) = (ev.client_x(), ev.client_y());
        if dnd.apply(|g| g.pointer_moved(x, y, dnd.threshold_px)) {
            log::debug!(target: "dnd", "drag started {:?}", dnd.gesture_read.with_untracked(|g| g.dragging_id()));
        }
    });
    let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    on_mousemove.forget();
}

/// Escape aborts any gesture, pointer or keyboard
fn bind_global_escape<K: DragKey>(doc: &web_sys::Document, dnd: DndSignals<K>) {
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        let active = dnd.gesture_read.with_untracked(|g| !g.is_idle());
        if active && ev.key() == "Escape" {
            dnd.apply(|g| g.cancel());
            log::debug!(target: "dnd", "gesture cancelled by escape");
        }
    });
    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

/// Bind global mouseup handler for drop detection.
/// Also binds the document mousemove and Escape handlers.
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: DragKey,
    F: Fn(K, K) + Clone + 'static,
{
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        log::warn!(target: "dnd", "no document, drag and drop disabled");
        return;
    };

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let pointer_gesture = dnd.gesture_read.with_untracked(|g| !g.is_idle() && !g.is_keyboard());
        // Pending presses fall through to the element's own click
        if pointer_gesture {
            finish(&dnd, &on_drop);
        }
    });
    let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    on_mouseup.forget();

    bind_global_mousemove(&doc, dnd);
    bind_global_escape(&doc, dnd);
}
