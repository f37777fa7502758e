//! Frontend Models
//!
//! Data structures mirrored to local storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

impl Todo {
    /// Fresh item with a unique id, appended by [`crate::list::add`]
    pub fn new(text: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            is_complete: false,
        }
    }
}
