//! Wire types for the todo items API.
//!
//! Defined independently of `todo-server` so the client only depends on the
//! JSON contract. The integration test catches drift between the two.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: Uuid,
    pub description: String,
    pub is_completed: bool,
}

/// Request payload for creating an item. Leave `id` empty to let the server
/// assign one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodoItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl NewTodoItem {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
            is_completed: false,
        }
    }
}
