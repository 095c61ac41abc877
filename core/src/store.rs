//! Concurrent map from id to todo item.
//!
//! # Design
//! The map sits behind a synchronous `parking_lot::RwLock`. Every operation
//! takes the lock once, does a single map operation and releases it, so the
//! lock is never held across an `.await` in the request layer.
//!
//! `get`, `replace` and `delete` check that the id is present and act on it
//! under the same lock acquisition. A concurrent delete therefore can never
//! slip in between the existence check and the read or write.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::types::{TodoId, TodoItem};

/// In-memory store of live todo items, keyed by id.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<HashMap<TodoId, TodoItem>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `item` under its own id, overwriting any entry with that id.
    pub fn insert(&self, item: TodoItem) -> TodoItem {
        self.items.write().insert(item.id, item.clone());
        item
    }

    pub fn get(&self, id: TodoId) -> Result<TodoItem> {
        self.items
            .read()
            .get(&id)
            .cloned()
            .ok_or(Error::ItemNotFound { id })
    }

    pub fn exists(&self, id: TodoId) -> bool {
        self.items.read().contains_key(&id)
    }

    /// Overwrites the item stored at `id`. The path id wins over whatever id
    /// `item` carries.
    pub fn replace(&self, id: TodoId, item: TodoItem) -> Result<TodoItem> {
        let mut items = self.items.write();
        let slot = items.get_mut(&id).ok_or(Error::ItemNotFound { id })?;
        *slot = TodoItem { id, ..item };
        Ok(slot.clone())
    }

    pub fn delete(&self, id: TodoId) -> Result<()> {
        self.items
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::ItemNotFound { id })
    }

    /// Snapshot of every live item, sorted by id.
    pub fn list(&self) -> Vec<TodoItem> {
        let mut items: Vec<TodoItem> = self.items.read().values().cloned().collect();
        items.sort_unstable_by_key(|item| item.id);
        items
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}
