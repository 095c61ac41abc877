//! In-memory todo item store.
//!
//! # Overview
//! Holds todo items in a concurrent map and hands out their ids from an
//! atomic counter. The HTTP layer lives in a separate crate and talks to this
//! one only through [`TodoService`].
//!
//! # Design
//! - [`IdAllocator`] issues ids 1, 2, 3, ... with a single atomic increment;
//!   an id is never reused, even after its item is deleted.
//! - [`ItemStore`] maps ids to items and reports [`Error::ItemNotFound`] for
//!   absent ids instead of silently doing nothing.
//! - [`TodoService`] ties the two together and is the only owner of both.
//!   It is `Send + Sync` and meant to be shared behind an `Arc`.
//! - Nothing here performs I/O or awaits, so every call completes in bounded
//!   time on whatever thread invokes it.

pub mod allocator;
pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use allocator::IdAllocator;
pub use error::{Error, Result};
pub use service::TodoService;
pub use store::ItemStore;
pub use types::{TodoId, TodoItem, TodoPayload};
