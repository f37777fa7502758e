//! Durable Storage
//!
//! Mirrors the ordered collection to browser local storage under a
//! single key. Reads never fail the caller: missing or unparsable data
//! comes back as an empty collection.

use gloo_storage::{LocalStorage, Storage};

use crate::models::Todo;

/// Local storage key holding the serialized collection
pub const STORAGE_KEY: &str = "todos";

fn decode(raw: &str) -> Vec<Todo> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn encode(todos: &[Todo]) -> String {
    serde_json::to_string(todos).unwrap_or_else(|_| "[]".to_string())
}

/// Read the persisted snapshot
pub fn load() -> Vec<Todo> {
    match LocalStorage::raw().get_item(STORAGE_KEY) {
        Ok(Some(raw)) => decode(&raw),
        _ => Vec::new(),
    }
}

/// Overwrite the persisted snapshot with the full collection. A write
/// failure (storage unavailable, quota exceeded) leaves the in-memory
/// state authoritative for the session.
pub fn persist(todos: &[Todo]) {
    if let Err(err) = LocalStorage::raw().set_item(STORAGE_KEY, &encode(todos)) {
        web_sys::console::warn_1(&format!("[STORAGE] persist failed: {:?}", err).into());
    }
}
