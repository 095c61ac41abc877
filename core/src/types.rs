//! Domain types for todo items.
//!
//! # Design
//! `TodoItem` is what the store owns and what every successful operation
//! hands back. `TodoPayload` is the inbound shape for create and update: it
//! may carry an `id`, but that field is never trusted. Identifiers are
//! always allocated by the service (create) or taken from the path (update).

use serde::{Deserialize, Serialize};

/// Identifier of a stored todo item. Values `<= 0` are never allocated.
pub type TodoId = i64;

/// A single todo item held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub name: String,
    pub task: String,
}

impl TodoItem {
    /// Build the stored form of `payload` under `id`, discarding any id the
    /// payload carried.
    pub fn from_payload(id: TodoId, payload: TodoPayload) -> Self {
        Self {
            id,
            name: payload.name,
            task: payload.task,
        }
    }
}

/// Request payload for creating or replacing a todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    pub name: String,
    pub task: String,
}

impl TodoPayload {
    pub fn new(name: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            task: task.into(),
        }
    }
}
