//! Request-level todo operations.
//!
//! # Design
//! `TodoService` owns the allocator and the store; nothing else can reach
//! either. The request layer parses a request into an optional payload
//! and/or an id, calls one method here, and maps the `Result` onto a
//! response. Each test builds its own service, so there is no shared
//! global state between them.

use tracing::info;

use crate::allocator::IdAllocator;
use crate::error::{Error, Result};
use crate::store::ItemStore;
use crate::types::{TodoId, TodoItem, TodoPayload};

#[derive(Debug, Default)]
pub struct TodoService {
    ids: IdAllocator,
    store: ItemStore,
}

impl TodoService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a service from an existing allocator and store.
    #[cfg(test)]
    pub(crate) fn with_parts(ids: IdAllocator, store: ItemStore) -> Self {
        Self { ids, store }
    }

    /// Allocates a fresh id and stores the payload under it. Any id on the
    /// payload is ignored.
    pub fn create(&self, payload: Option<TodoPayload>) -> Result<TodoItem> {
        let payload = payload.ok_or(Error::MissingPayload)?;
        let id = self.ids.next();
        let item = self.store.insert(TodoItem::from_payload(id, payload));
        info!(id, "todo item created");
        Ok(item)
    }

    pub fn read(&self, id: TodoId) -> Result<TodoItem> {
        self.store.get(id).inspect_err(log_not_found)
    }

    /// Replaces the item at `id` wholesale. The payload is checked before the
    /// id, so a bodiless update of a missing id reports `MissingPayload`.
    pub fn update(&self, id: TodoId, payload: Option<TodoPayload>) -> Result<TodoItem> {
        let payload = payload.ok_or(Error::MissingPayload)?;
        let item = self
            .store
            .replace(id, TodoItem::from_payload(id, payload))
            .inspect_err(log_not_found)?;
        info!(id, "todo item updated");
        Ok(item)
    }

    pub fn delete(&self, id: TodoId) -> Result<()> {
        self.store.delete(id).inspect_err(log_not_found)?;
        info!(id, "todo item deleted");
        Ok(())
    }

    pub fn list(&self) -> Vec<TodoItem> {
        self.store.list()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

fn log_not_found(err: &Error) {
    if let Error::ItemNotFound { id } = err {
        info!(id = *id, "todo item not found");
    }
}
