//! New Todo Form Component
//!
//! Single-line entry with an Add button; Enter submits the form. The
//! bulk-delete control lives next to the add row and only appears while
//! items are staged.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_todo, store_bulk_delete, use_app_store, AppStateStoreFields};

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.is_empty() {
            return;
        }
        store_add_todo(&store, &text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Enter todo"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button type="submit" disabled=move || new_text.get().is_empty()>"Add"</button>
            <BulkDeleteButton />
        </form>
    }
}

/// Collection-level delete for all staged items
#[component]
fn BulkDeleteButton() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || !store.checked().read().is_empty()>
            <button
                type="button"
                class="bulk-delete-btn"
                title="Delete checked todos"
                on:click=move |_| store_bulk_delete(&store)
            >
                "🗑"
            </button>
        </Show>
    }
}
