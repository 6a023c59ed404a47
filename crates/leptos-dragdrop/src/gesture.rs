//! Gesture State Machine
//!
//! One drag gesture from pickup to drop or cancellation, with no DOM access.
//! Pointer: `Idle -> Pending -> Dragging -> Idle`.
//! Keyboard: `Idle -> Dragging -> Idle`.

/// Ids the sortable list can be keyed by
pub trait DragKey: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {}

impl<T> DragKey for T where T: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {}

/// Current phase of a drag gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture<K> {
    /// No gesture in progress
    Idle,
    /// Pointer pressed on a row but not yet moved past the threshold
    Pending { id: K, start_x: i32, start_y: i32 },
    /// Row picked up; `over` is the row it would land on
    Dragging { id: K, over: Option<K>, keyboard: bool },
}

impl<K> Default for Gesture<K> {
    fn default() -> Self {
        Gesture::Idle
    }
}

/// Direction for keyboard stepping
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

/// A completed drop: move `source` to the slot held by `target`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reorder<K> {
    pub source: K,
    pub target: K,
}

impl<K: DragKey> Gesture<K> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    pub fn is_keyboard(&self) -> bool {
        matches!(self, Gesture::Dragging { keyboard: true, .. })
    }

    /// Id of the row being dragged (not set while merely pending)
    pub fn dragging_id(&self) -> Option<K> {
        match self {
            Gesture::Dragging { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Row that owns the gesture, pending or dragging
    pub fn active_id(&self) -> Option<K> {
        match self {
            Gesture::Pending { id, .. } | Gesture::Dragging { id, .. } => Some(*id),
            Gesture::Idle => None,
        }
    }

    /// Id of the row currently under the dragged row
    pub fn over_id(&self) -> Option<K> {
        match self {
            Gesture::Dragging { over, .. } => *over,
            _ => None,
        }
    }

    /// Pointer pressed on a draggable row
    pub fn press(&mut self, id: K, x: i32, y: i32) {
        if self.is_idle() {
            *self = Gesture::Pending { id, start_x: x, start_y: y };
        }
    }

    /// Pointer moved; starts dragging once either axis exceeds `threshold_px`.
    /// Returns true on the transition into `Dragging`.
    pub fn pointer_moved(&mut self, x: i32, y: i32, threshold_px: i32) -> bool {
        if let Gesture::Pending { id, start_x, start_y } = *self {
            let dx = (x - start_x).abs();
            let dy = (y - start_y).abs();
            if dx > threshold_px || dy > threshold_px {
                *self = Gesture::Dragging { id, over: None, keyboard: false };
                return true;
            }
        }
        false
    }

    /// Dragged row entered another row. Entering the dragged row itself is ignored.
    pub fn enter(&mut self, target: K) {
        if let Gesture::Dragging { id, over, .. } = self {
            if *id != target {
                *over = Some(target);
            }
        }
    }

    /// Pointer left a row; keyboard targets are unaffected
    pub fn leave(&mut self) {
        if let Gesture::Dragging { over, keyboard: false, .. } = self {
            *over = None;
        }
    }

    /// Keyboard pickup of a focused row. Returns false if a gesture is already running.
    pub fn pick_up(&mut self, id: K) -> bool {
        if self.is_idle() {
            *self = Gesture::Dragging { id, over: None, keyboard: true };
            true
        } else {
            false
        }
    }

    /// Move the keyboard target one row through `order`, the ids as displayed.
    /// Stepping back onto the dragged row clears the target.
    pub fn step(&mut self, order: &[K], direction: Step) {
        let Gesture::Dragging { id, over, keyboard: true } = self else {
            return;
        };
        let current = over.unwrap_or(*id);
        let Some(index) = order.iter().position(|k| *k == current) else {
            return;
        };
        let next = match direction {
            Step::Up => index.checked_sub(1),
            Step::Down => Some(index + 1).filter(|i| *i < order.len()),
        };
        if let Some(next) = next {
            let target = order[next];
            *over = if target == *id { None } else { Some(target) };
        }
    }

    /// End the gesture. Yields a reorder only for a drag with a defined
    /// target different from the source; anything else is a cancellation.
    pub fn release(&mut self) -> Option<Reorder<K>> {
        let ended = std::mem::take(self);
        match ended {
            Gesture::Dragging { id, over: Some(target), .. } if id != target => {
                Some(Reorder { source: id, target })
            }
            _ => None,
        }
    }

    /// Discard the gesture
    pub fn cancel(&mut self) {
        *self = Gesture::Idle;
    }

    /// Discard the gesture if its row or target is no longer in `order`.
    /// Returns true if it was discarded.
    pub fn cancel_if_missing(&mut self, order: &[K]) -> bool {
        let source_gone = self.active_id().is_some_and(|id| !order.contains(&id));
        let target_gone = self.over_id().is_some_and(|id| !order.contains(&id));
        if source_gone || target_gone {
            self.cancel();
            true
        } else {
            false
        }
    }

    /// Row `id` lost focus; a keyboard gesture it owns ends without a drop
    pub fn blur(&mut self, id: K) {
        if self.is_keyboard() && self.dragging_id() == Some(id) {
            self.cancel();
        }
    }
}

/// Move the element at `from` to index `to`, shifting the ones in between by one.
/// Out-of-range indices leave `items` untouched.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
}
