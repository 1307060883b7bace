//! Domain core for the todo service.
//!
//! # Overview
//! Holds the todo model and the single shared, mutex-guarded collection that
//! every request goes through. Nothing here knows about HTTP; the server
//! crate translates requests into `TodoStore` calls and `StoreError`s into
//! status codes.
//!
//! # Design
//! - `TodoStore` is constructed explicitly and injected, never a global.
//! - Ids come from a monotonic counter starting at 1 and are never reused.
//! - Title validation lives in the store, so no caller can bypass it.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{CreateTodo, Todo, TodoId, UpdateTodoStatus};
