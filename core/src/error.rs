//! Error types for store operations.
//!
//! # Design
//! Only two things can go wrong inside the store: a create with an empty
//! title, or an id that is not (or no longer) in the collection. Everything
//! HTTP-specific lives in the server crate.

use thiserror::Error;

use crate::types::TodoId;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `create` was called with an empty title. The collection is untouched.
    #[error("title is required")]
    EmptyTitle,

    /// No todo with this id exists.
    #[error("todo {0} not found")]
    NotFound(TodoId),
}
