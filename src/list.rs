//! List Operations
//!
//! Pure transformations over the ordered to-do collection and the
//! checked set. Each operation reports whether it changed anything, so
//! callers persist only after real mutations. Unknown ids are silent
//! no-ops, not errors.

use std::collections::HashSet;

use crate::models::Todo;

/// Append a new item; rejected when `text` is empty
pub fn add(todos: &mut Vec<Todo>, text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    todos.push(Todo::new(text));
    true
}

/// Replace the text of the matching item, leaving order and completion alone
pub fn edit(todos: &mut [Todo], id: &str, new_text: &str) -> bool {
    match todos.iter_mut().find(|t| t.id == id) {
        Some(todo) => {
            todo.text = new_text.to_string();
            true
        }
        None => false,
    }
}

/// Flip completion for the matching item; returns the new state
pub fn toggle(todos: &mut [Todo], id: &str) -> Option<bool> {
    let todo = todos.iter_mut().find(|t| t.id == id)?;
    todo.is_complete = !todo.is_complete;
    Some(todo.is_complete)
}

/// Keep the checked set in step with a checkbox: complete items are
/// staged for bulk deletion, incomplete ones are unstaged
pub fn mirror_checked(checked: &mut HashSet<String>, id: &str, is_complete: bool) {
    if is_complete {
        checked.insert(id.to_string());
    } else {
        checked.remove(id);
    }
}

/// Remove one item
pub fn remove(todos: &mut Vec<Todo>, id: &str) -> bool {
    let before = todos.len();
    todos.retain(|t| t.id != id);
    todos.len() != before
}

/// Remove every item whose id is in `checked`, keeping the relative
/// order of the rest
pub fn remove_all(todos: &mut Vec<Todo>, checked: &HashSet<String>) -> bool {
    let before = todos.len();
    todos.retain(|t| !checked.contains(&t.id));
    todos.len() != before
}

/// Splice move: the source item takes the position currently occupied by
/// the target, shifting intervening items. No-op when either id is
/// absent or they are equal.
pub fn reorder(todos: &mut Vec<Todo>, source_id: &str, target_id: &str) -> bool {
    if source_id == target_id {
        return false;
    }
    let Some(from) = todos.iter().position(|t| t.id == source_id) else {
        return false;
    };
    let Some(to) = todos.iter().position(|t| t.id == target_id) else {
        return false;
    };
    let moved = todos.remove(from);
    todos.insert(to, moved);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: &str, text: &str) -> Todo {
        Todo {
            id: id.to_string(),
            text: text.to_string(),
            is_complete: false,
        }
    }

    fn make_list() -> Vec<Todo> {
        vec![
            make_todo("a", "first"),
            make_todo("b", "second"),
            make_todo("c", "third"),
            make_todo("d", "fourth"),
        ]
    }

    fn ids(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.id.as_str()).collect()
    }

    /// Toggle plus the checked-set mirroring the store performs
    fn toggle_checked(todos: &mut [Todo], checked: &mut HashSet<String>, id: &str) -> bool {
        match toggle(todos, id) {
            Some(is_complete) => {
                mirror_checked(checked, id, is_complete);
                true
            }
            None => false,
        }
    }

    #[test]
    fn add_appends_incomplete_item() {
        let mut todos = make_list();
        assert!(add(&mut todos, "fifth"));
        assert_eq!(todos.len(), 5);
        let last = todos.last().unwrap();
        assert_eq!(last.text, "fifth");
        assert!(!last.is_complete);
    }

    #[test]
    fn add_empty_text_is_rejected() {
        let mut todos = make_list();
        assert!(!add(&mut todos, ""));
        assert_eq!(todos, make_list());
    }

    #[test]
    fn edit_changes_only_text() {
        let mut todos = make_list();
        todos[1].is_complete = true;
        let snapshot = todos.clone();
        assert!(edit(&mut todos, "b", "rewritten"));
        assert_eq!(todos[1].text, "rewritten");
        assert!(todos[1].is_complete);
        assert_eq!(todos[0], snapshot[0]);
        assert_eq!(todos[2], snapshot[2]);
        assert_eq!(todos[3], snapshot[3]);
        assert_eq!(ids(&todos), ids(&snapshot));
    }

    #[test]
    fn edit_unknown_id_is_noop() {
        let mut todos = make_list();
        assert!(!edit(&mut todos, "zzz", "rewritten"));
        assert_eq!(todos, make_list());
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut todos = make_list();
        let mut checked = HashSet::new();

        assert!(toggle_checked(&mut todos, &mut checked, "b"));
        assert!(todos[1].is_complete);
        assert!(checked.contains("b"));

        assert!(toggle_checked(&mut todos, &mut checked, "b"));
        assert!(!todos[1].is_complete);
        assert!(checked.is_empty());
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut todos = make_list();
        assert_eq!(toggle(&mut todos, "zzz"), None);
        assert_eq!(todos, make_list());
    }

    #[test]
    fn remove_drops_exactly_one_item() {
        let mut todos = make_list();
        assert!(remove(&mut todos, "c"));
        assert_eq!(ids(&todos), vec!["a", "b", "d"]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut todos = make_list();
        assert!(!remove(&mut todos, "zzz"));
        assert_eq!(todos, make_list());
    }

    #[test]
    fn remove_all_keeps_remainder_order() {
        let mut todos = make_list();
        let mut checked = HashSet::new();
        toggle_checked(&mut todos, &mut checked, "a");
        toggle_checked(&mut todos, &mut checked, "c");

        assert!(remove_all(&mut todos, &checked));
        checked.clear();
        assert_eq!(ids(&todos), vec!["b", "d"]);
        assert!(checked.is_empty());
    }

    #[test]
    fn remove_all_with_nothing_checked_is_noop() {
        let mut todos = make_list();
        assert!(!remove_all(&mut todos, &HashSet::new()));
        assert_eq!(todos, make_list());
    }

    #[test]
    fn reorder_moves_forward() {
        let mut todos = make_list();
        assert!(reorder(&mut todos, "a", "c"));
        assert_eq!(ids(&todos), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn reorder_moves_backward() {
        let mut todos = make_list();
        assert!(reorder(&mut todos, "d", "b"));
        assert_eq!(ids(&todos), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn reorder_preserves_items() {
        let mut todos = make_list();
        reorder(&mut todos, "a", "d");
        let mut sorted = ids(&todos);
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "c", "d"]);
        // Non-moved items keep their relative order
        assert_eq!(
            ids(&todos)
                .into_iter()
                .filter(|id| *id != "a")
                .collect::<Vec<_>>(),
            vec!["b", "c", "d"]
        );
    }

    #[test]
    fn reorder_same_or_unknown_id_is_noop() {
        let mut todos = make_list();
        assert!(!reorder(&mut todos, "b", "b"));
        assert!(!reorder(&mut todos, "zzz", "b"));
        assert!(!reorder(&mut todos, "b", "zzz"));
        assert_eq!(todos, make_list());
    }

    #[test]
    fn add_toggle_delete_scenario() {
        let mut todos = Vec::new();
        let mut checked = HashSet::new();

        assert!(add(&mut todos, "buy milk"));
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "buy milk");
        assert!(!todos[0].is_complete);

        let id = todos[0].id.clone();
        assert!(toggle_checked(&mut todos, &mut checked, &id));
        assert!(todos[0].is_complete);

        assert!(remove(&mut todos, &id));
        checked.remove(&id);
        assert!(todos.is_empty());
        assert!(checked.is_empty());
    }
}
