//! Identifier allocation for newly created todo items.
//!
//! # Design
//! A single `AtomicI64` holds the last issued id. Every call to
//! [`IdAllocator::next`] is one read-modify-write on that atomic, so ids are
//! unique and strictly increasing in the order the updates land, no matter
//! how many request workers call in parallel. No lock is taken.
//!
//! Ids start at 1. Zero and negative values are reserved for "no id" by the
//! request layer and are never produced.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::types::TodoId;

/// Lock-free source of unique, increasing todo ids.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicI64,
}

impl IdAllocator {
    /// Creates an allocator whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator that resumes after `last`; the next id issued is
    /// `last + 1`. Negative values are treated as 0.
    #[cfg(test)]
    pub(crate) fn starting_after(last: TodoId) -> Self {
        Self {
            last: AtomicI64::new(last.max(0)),
        }
    }

    /// Issues the next id.
    ///
    /// # Panics
    /// Panics once `TodoId::MAX` has been issued. The counter never wraps, so
    /// an id can never be handed out twice.
    pub fn next(&self) -> TodoId {
        match self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_add(1))
        {
            Ok(previous) => previous + 1,
            Err(_) => panic!("identifier space exhausted"),
        }
    }

    /// The most recently issued id, or 0 if none has been issued.
    pub fn last_issued(&self) -> TodoId {
        self.last.load(Ordering::Acquire)
    }
}
