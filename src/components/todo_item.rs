//! Todo Item Component
//!
//! One row: drag handle, completion checkbox, text or inline editor,
//! and edit/delete controls revealed on hover.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::components::{Typography, Variant};
use crate::models::Todo;
use crate::store::{store_delete_todo, store_edit_todo, store_toggle_todo, use_app_store};

/// A single todo row. The parent keys rows by (id, text, is_complete),
/// so any external change to the item rebuilds the row and drops stale
/// transient state (edit mode, draft text, hover).
#[component]
pub fn TodoItem(todo: Todo, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id.clone();
    let text = todo.text.clone();
    let is_complete = todo.is_complete;

    let (is_edit, set_is_edit) = signal(false);
    let (draft, set_draft) = signal(todo.text.clone());
    let (hover, set_hover) = signal(false);

    let editor_ref: NodeRef<html::Textarea> = NodeRef::new();

    // Focus the editor with the caret at the end when entering edit mode
    Effect::new(move |_| {
        if !is_edit.get() {
            return;
        }
        if let (Some(win), Some(el)) = (web_sys::window(), editor_ref.get()) {
            // Focus on next tick so the node is mounted
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                wasm_bindgen::closure::Closure::once_into_js(move || {
                    let _ = el.focus();
                    // selectionStart/End are in UTF-16 code units
                    let len = el.value().encode_utf16().count() as u32;
                    let _ = el.set_selection_range(len, len);
                })
                .as_ref()
                .unchecked_ref(),
                0,
            );
        }
    });

    let commit_edit = {
        let id = id.clone();
        move || {
            store_edit_todo(&store, &id, &draft.get_untracked());
            set_is_edit.set(false);
        }
    };

    let on_toggle = {
        let id = id.clone();
        move |_| store_toggle_todo(&store, &id)
    };
    let on_delete = {
        let id = id.clone();
        move |_| store_delete_todo(&store, &id)
    };
    let on_handle_mousedown = make_on_mousedown(dnd, id.clone());

    let is_dragging = {
        let id = id.clone();
        move || dnd.dragging_id_read.get().as_deref() == Some(id.as_str())
    };
    let is_drop_target = {
        let id = id.clone();
        move || dnd.drop_target_read.get().as_deref() == Some(id.as_str())
    };
    let row_class = move || {
        let mut c = String::from("todo-row");
        if is_complete {
            c.push_str(" completed");
        }
        if is_dragging() {
            c.push_str(" dragging");
        }
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    let display_text = text.clone();
    let hover_text = text.clone();

    view! {
        <div
            class=row_class
            data-drag-id=id.clone()
            on:mouseenter=move |_| set_hover.set(true)
            on:mouseleave=move |_| set_hover.set(false)
        >
            <span class="drag-handle" on:mousedown=on_handle_mousedown>"⋮⋮"</span>

            <input type="checkbox" prop:checked=is_complete on:change=on_toggle />

            // Text or inline editor
            {move || if is_edit.get() {
                let commit_on_key = commit_edit.clone();
                let commit_on_blur = commit_edit.clone();
                view! {
                    <textarea
                        class="todo-editor"
                        rows=1
                        node_ref=editor_ref
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_draft.set(textarea.value());
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                commit_on_key();
                            }
                        }
                        on:blur=move |_| commit_on_blur()
                    ></textarea>
                }.into_any()
            } else {
                let text = display_text.clone();
                view! {
                    <Typography variant=Variant::Label2>{text}</Typography>
                }.into_any()
            }}

            // Edit/delete controls shown on hover
            {move || {
                if hover.get() && !is_edit.get() {
                    let on_delete = on_delete.clone();
                    let draft_text = hover_text.clone();
                    Some(view! {
                        <div class="row-actions">
                            <button
                                class="edit-btn"
                                title="Edit"
                                on:click=move |_| {
                                    set_draft.set(draft_text.clone());
                                    set_is_edit.set(true);
                                }
                            >"✎"</button>
                            <button class="delete-btn" title="Delete" on:click=on_delete>"×"</button>
                        </div>
                    })
                } else {
                    None
                }
            }}
        </div>
    }
}
