//! Error types for the todo core.
//!
//! # Design
//! Only two things can go wrong inside the core: a create or update arrived
//! without a body, or an operation referenced an id that is not in the
//! store. Both are returned to the caller as values; the core never logs
//! them as failures and never retries.

use crate::types::TodoId;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by `TodoService` and `ItemStore` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Create or update was invoked without a payload.
    #[error("missing expected content")]
    MissingPayload,

    /// No item with this id is currently stored.
    #[error("todo item {id} not found")]
    ItemNotFound { id: TodoId },
}
