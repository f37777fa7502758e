//! Todo List View Component
//!
//! Renders the ordered collection with drag-and-drop reorder support.

use leptos::prelude::*;

use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

use crate::components::{TodoItem, Typography, Variant};
use crate::store::{store_reorder_todo, use_app_store, AppStateStoreFields};

/// The ordered list plus empty state and item count
#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    // Create DnD signals and resolve drops into reorders
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |source_id, target_id| {
        web_sys::console::log_1(&format!("[DND] drop: source={}, target={}", source_id, target_id).into());
        store_reorder_todo(&store, &source_id, &target_id);
    });

    view! {
        <Show
            when=move || !store.todos().read().is_empty()
            fallback=|| view! {
                <div class="empty-state">
                    <span class="empty-icon">"🧹"</span>
                    <Typography variant=Variant::H2>"No todos"</Typography>
                </div>
            }
        >
            <div class="todo-list">
                <For
                    each=move || store.todos().get()
                    // Key on all mutable fields so external changes rebuild
                    // the row and reset its transient edit state
                    key=|todo| (todo.id.clone(), todo.text.clone(), todo.is_complete)
                    children=move |todo| view! { <TodoItem todo=todo dnd=dnd /> }
                />
            </div>
        </Show>

        <p class="item-count">{move || format!("{} todos", store.todos().read().len())}</p>
    }
}
