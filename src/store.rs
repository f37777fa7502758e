//! Global List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The
//! `store_*` helpers are the only write path to the shared state; each
//! one applies a pure list operation and persists the collection when
//! it actually changed. Field write guards share one lock, so guards
//! are always taken one at a time.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;
use crate::{list, storage};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ordered to-do collection
    pub todos: Vec<Todo>,
    /// Ids staged for bulk deletion; always a subset of live ids
    pub checked: HashSet<String>,
}

impl AppState {
    /// Startup state: the persisted collection, nothing staged
    pub fn load() -> Self {
        Self {
            todos: storage::load(),
            checked: HashSet::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

fn persist(store: &AppStore) {
    storage::persist(&store.todos().read());
}

// ========================
// Store Mutation Helpers
// ========================

/// Append a new item; empty text is rejected
pub fn store_add_todo(store: &AppStore, text: &str) {
    if list::add(&mut store.todos().write(), text) {
        persist(store);
    }
}

/// Replace the text of the item with the given id
pub fn store_edit_todo(store: &AppStore, id: &str, new_text: &str) {
    if list::edit(&mut store.todos().write(), id, new_text) {
        persist(store);
    }
}

/// Flip completion for the item with the given id, staging complete
/// items for bulk deletion
pub fn store_toggle_todo(store: &AppStore, id: &str) {
    let Some(is_complete) = list::toggle(&mut store.todos().write(), id) else {
        return;
    };
    list::mirror_checked(&mut store.checked().write(), id, is_complete);
    persist(store);
}

/// Remove the item with the given id
pub fn store_delete_todo(store: &AppStore, id: &str) {
    let removed = list::remove(&mut store.todos().write(), id);
    // Checked ids must stay a subset of live ids
    store.checked().write().remove(id);
    if removed {
        persist(store);
    }
}

/// Remove every checked item and clear the checked set
pub fn store_bulk_delete(store: &AppStore) {
    let checked = std::mem::take(&mut *store.checked().write());
    if checked.is_empty() {
        return;
    }
    list::remove_all(&mut store.todos().write(), &checked);
    persist(store);
}

/// Move the source item to the target item's position
pub fn store_reorder_todo(store: &AppStore, source_id: &str, target_id: &str) {
    if list::reorder(&mut store.todos().write(), source_id, target_id) {
        persist(store);
    }
}
