//! Todo List Model
//!
//! Ordered collection of todos and the operations the UI applies to it.
//! Every operation is total: unknown ids and blank text are no-ops.

use leptos_dragdrop::array_move;

use crate::models::{Filter, Todo};

/// Ordered todo list. Ids are unique within the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    /// Build from existing todos, keeping the first occurrence of any repeated id
    pub fn from_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        let mut items: Vec<Todo> = Vec::new();
        for todo in todos {
            if !items.iter().any(|t| t.id == todo.id) {
                items.push(todo);
            }
        }
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    fn index_of(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }

    /// Id for a new todo created at `now_ms`: the timestamp, bumped past any existing id.
    /// If the largest id is `u64::MAX`, the smallest unused id is taken instead.
    fn fresh_id(&self, now_ms: u64) -> u64 {
        match self.items.iter().map(|t| t.id).max() {
            Some(max) if max >= now_ms => max.checked_add(1).unwrap_or_else(|| self.smallest_unused_id()),
            _ => now_ms,
        }
    }

    fn smallest_unused_id(&self) -> u64 {
        let mut used: Vec<u64> = self.items.iter().map(|t| t.id).collect();
        used.sort_unstable();
        let mut candidate = 0;
        for id in used {
            if id > candidate {
                break;
            }
            // ids are unique and fewer than u64::MAX, so this never wraps
            candidate = id + 1;
        }
        candidate
    }

    /// Append a todo with trimmed `text`. Blank text creates nothing.
    pub fn add(&mut self, text: &str, now_ms: u64) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id(now_ms);
        self.items.push(Todo::new(id, text));
        Some(id)
    }

    /// Flip `completed` on the todo with `id`
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Drop every completed todo, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|t| !t.completed);
        before - self.items.len()
    }

    /// Move `source` into the slot currently held by `target`, shifting the
    /// todos in between by one. Ids are resolved against the full list.
    pub fn reorder(&mut self, source: u64, target: u64) -> bool {
        if source == target {
            return false;
        }
        match (self.index_of(source), self.index_of(target)) {
            (Some(from), Some(to)) => {
                array_move(&mut self.items, from, to);
                true
            }
            _ => false,
        }
    }

    /// Todos visible under `filter`, in list order
    pub fn filtered(&self, filter: Filter) -> impl Iterator<Item = &Todo> + '_ {
        self.items.iter().filter(move |t| filter.matches(t))
    }

    /// Ids visible under `filter`, in list order
    pub fn filtered_ids(&self, filter: Filter) -> Vec<u64> {
        self.filtered(filter).map(|t| t.id).collect()
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn seeded() -> TodoList {
        let texts = [
            "Complete online JavaScript course",
            "Jog around the park 3x",
            "10 minutes meditation",
            "Read for 1 hour",
            "Pick up groceries",
            "Complete Todo App on Frontend Mentor",
        ];
        TodoList::from_todos(texts.iter().enumerate().map(|(i, text)| Todo {
            id: i as u64 + 1,
            text: text.to_string(),
            completed: i == 0,
        }))
    }

    fn ids(list: &TodoList) -> Vec<u64> {
        list.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TodoList::default();
        let id = list.add("  Buy milk \n", 1_000).unwrap();
        assert_eq!(id, 1_000);
        let todo = list.get(id).unwrap();
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = seeded();
        assert_eq!(list.add("   \t", 5_000), None);
        assert_eq!(list.add("", 5_000), None);
        assert_eq!(list, seeded());
    }

    #[test]
    fn test_add_same_millisecond_gets_distinct_ids() {
        let mut list = TodoList::default();
        let a = list.add("a", 42).unwrap();
        let b = list.add("b", 42).unwrap();
        let c = list.add("c", 10).unwrap();
        assert_eq!((a, b, c), (42, 43, 44));
    }

    #[test]
    fn test_add_after_max_id_reuses_smallest_free_id() {
        let mut list = TodoList::from_todos(vec![Todo::new(u64::MAX, "last"), Todo::new(0, "zero")]);
        assert_eq!(list.add("Buy milk", 1_700_000_000_000), Some(1));
        assert_eq!(list.add("Walk dog", 1_700_000_000_000), Some(2));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_clear_completed_with_nothing_completed() {
        let mut list = seeded();
        list.toggle(1);
        let before = list.clone();
        assert_eq!(list.clear_completed(), 0);
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggle_keeps_displayed_ids() {
        // rows are keyed by id alone, so a toggle must not change the id sequence
        let mut list = seeded();
        let before = list.filtered_ids(Filter::All);
        list.toggle(3);
        list.toggle(1);
        assert_eq!(list.filtered_ids(Filter::All), before);
        assert_eq!(list.filtered_ids(Filter::Completed), vec![3]);
    }

    #[test]
    fn test_toggle_and_remove_missing_id() {
        let mut list = seeded();
        assert!(!list.toggle(99));
        assert!(!list.remove(99));
        assert_eq!(list, seeded());
    }

    #[test]
    fn test_reorder_moves_not_swaps() {
        let mut list = seeded();
        assert!(list.reorder(3, 5));
        assert_eq!(ids(&list), vec![1, 2, 4, 5, 3, 6]);
    }

    #[test]
    fn test_reorder_upwards() {
        let mut list = seeded();
        assert!(list.reorder(6, 2));
        assert_eq!(ids(&list), vec![1, 6, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reorder_noops() {
        let mut list = seeded();
        assert!(!list.reorder(3, 3));
        assert!(!list.reorder(3, 77));
        assert!(!list.reorder(77, 3));
        assert_eq!(list, seeded());
    }

    #[test]
    fn test_reorder_uses_full_list_under_filter() {
        // Active view shows [2,3,4,5,6]; dropping 6 on 2 lands 6 where 2 sits in the full list
        let mut list = seeded();
        assert_eq!(list.filtered_ids(Filter::Active), vec![2, 3, 4, 5, 6]);
        assert!(list.reorder(6, 2));
        assert_eq!(ids(&list), vec![1, 6, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seed_scenario() {
        let mut list = seeded();
        assert_eq!(list.active_count(), 5);

        list.toggle(2);
        assert_eq!(list.active_count(), 4);

        list.add("Buy milk", 1_700_000_000_000);
        assert_eq!(list.len(), 7);
        let last = list.iter().last().unwrap();
        assert_eq!(last.text, "Buy milk");
        assert!(!last.completed);

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(list.len(), 5);
        assert_eq!(ids(&list)[..4], [3, 4, 5, 6]);
        assert!(list.get(1).is_none());
        assert!(list.get(2).is_none());
    }

    #[test]
    fn test_from_todos_drops_repeated_ids() {
        let list = TodoList::from_todos(vec![Todo::new(1, "a"), Todo::new(1, "b"), Todo::new(2, "c")]);
        assert_eq!(ids(&list), vec![1, 2]);
        assert_eq!(list.get(1).unwrap().text, "a");
    }

    fn arb_list() -> impl Strategy<Value = TodoList> {
        prop::collection::vec(("[a-z ]{0,12}", any::<bool>()), 0..12).prop_map(|entries| {
            TodoList::from_todos(entries.into_iter().enumerate().map(|(i, (text, completed))| Todo {
                id: i as u64 * 3 + 1,
                text,
                completed,
            }))
        })
    }

    proptest! {
        #[test]
        fn prop_add(list in arb_list(), text in "[ a-z]{0,8}", now in 0u64..100) {
            let mut next = list.clone();
            let id = next.add(&text, now);
            if text.trim().is_empty() {
                prop_assert_eq!(id, None);
                prop_assert_eq!(&next, &list);
            } else {
                let id = id.unwrap();
                prop_assert_eq!(next.len(), list.len() + 1);
                let last = next.iter().last().unwrap();
                prop_assert_eq!(last.text.as_str(), text.trim());
                prop_assert!(!last.completed);
                prop_assert!(list.get(id).is_none());
            }
        }

        #[test]
        fn prop_double_toggle_roundtrip(list in arb_list(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!list.is_empty());
            let id = ids(&list)[pick.index(list.len())];
            let mut next = list.clone();
            next.toggle(id);
            prop_assert_ne!(&next, &list);
            next.toggle(id);
            prop_assert_eq!(next, list);
        }

        #[test]
        fn prop_remove_absent_is_noop(list in arb_list()) {
            let mut next = list.clone();
            prop_assert!(!next.remove(2));
            prop_assert_eq!(next, list);
        }

        #[test]
        fn prop_clear_completed_idempotent(list in arb_list()) {
            let mut once = list.clone();
            once.clear_completed();
            let mut twice = once.clone();
            prop_assert_eq!(twice.clear_completed(), 0);
            prop_assert_eq!(twice, once);
        }

        #[test]
        fn prop_reorder_back_restores_adjacency(list in arb_list(), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
            prop_assume!(list.len() >= 2);
            let all = ids(&list);
            let (a, b) = (all[a.index(all.len())], all[b.index(all.len())]);
            prop_assume!(a != b);
            let mut next = list.clone();
            prop_assert!(next.reorder(a, b));
            let moved = ids(&next);
            let (ia, ib) = (
                moved.iter().position(|x| *x == a).unwrap(),
                moved.iter().position(|x| *x == b).unwrap(),
            );
            // a and b end up adjacent, a in b's old slot
            prop_assert_eq!(ia.abs_diff(ib), 1);
            prop_assert_eq!(ia, all.iter().position(|x| *x == b).unwrap());
            next.reorder(b, a);
            let (oa, ob) = (
                all.iter().position(|x| *x == a).unwrap(),
                all.iter().position(|x| *x == b).unwrap(),
            );
            let back = ids(&next);
            let (na, nb) = (
                back.iter().position(|x| *x == a).unwrap(),
                back.iter().position(|x| *x == b).unwrap(),
            );
            prop_assert_eq!(oa < ob, na < nb);
            prop_assert_eq!(na.abs_diff(nb), 1);
        }

        #[test]
        fn prop_filters_partition(list in arb_list()) {
            let active: HashSet<u64> = list.filtered_ids(Filter::Active).into_iter().collect();
            let completed: HashSet<u64> = list.filtered_ids(Filter::Completed).into_iter().collect();
            let all: HashSet<u64> = list.filtered_ids(Filter::All).into_iter().collect();
            prop_assert!(active.is_disjoint(&completed));
            prop_assert_eq!(active.union(&completed).copied().collect::<HashSet<_>>(), all);
            prop_assert_eq!(list.active_count(), active.len());
        }
    }
}
