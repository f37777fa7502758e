//! To-do List App
//!
//! Top-level layout: header, add form, list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoListView, Typography, Variant};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Deserialize the persisted collection once at startup
    let state = AppState::load();
    web_sys::console::log_1(&format!("[APP] loaded {} todos", state.todos.len()).into());

    let store = Store::new(state);
    provide_context(store);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <span class="header-icon">"📋"</span>
                <Typography variant=Variant::H1>"To-do List"</Typography>
            </header>

            <NewTodoForm />

            <TodoListView />
        </div>
    }
}
