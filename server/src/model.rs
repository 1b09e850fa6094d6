//! Core model for todo items and the JSON payload accepted at the HTTP
//! boundary.
//!
//! # Design
//! `TodoItem` is what the service hands out and what the API serializes. It
//! is deliberately separate from `store::TodoRecord` so storage details never
//! leak into responses. `TodoItemPayload` keeps every field optional that a
//! client may omit, so the controller can answer with a domain message
//! instead of a deserialization rejection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A todo item as seen by callers of the service and the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: Uuid,
    pub description: String,
    pub is_completed: bool,
}

/// Input for `TodoItemService::create`. `id: None` leaves the choice of id to
/// the service's `IdPolicy`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodoItem {
    pub id: Option<Uuid>,
    pub description: String,
    pub is_completed: bool,
}

/// Request body for `POST` and `PUT`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemPayload {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

impl TodoItemPayload {
    /// Convert into a create request. Returns `None` when the description is
    /// missing or empty.
    pub fn into_new_item(self) -> Option<NewTodoItem> {
        if description_is_blank(self.description.as_deref()) {
            return None;
        }
        Some(NewTodoItem {
            id: self.id,
            description: self.description.unwrap_or_default(),
            is_completed: self.is_completed,
        })
    }

    /// Convert into a full item for an update addressed at `id`. A missing
    /// description becomes the empty string, matching a client that sent
    /// `null`.
    pub fn into_item(self, id: Uuid) -> TodoItem {
        TodoItem {
            id,
            description: self.description.unwrap_or_default(),
            is_completed: self.is_completed,
        }
    }
}

/// True when a description is absent or empty. Whitespace counts as content.
pub fn description_is_blank(description: Option<&str>) -> bool {
    description.map_or(true, str::is_empty)
}

/// Case-insensitive description equality.
pub fn descriptions_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
