//! In-memory, mutex-guarded todo collection.
//!
//! # Design
//! `TodoStore` owns the items and the next-id counter behind a single
//! `tokio::sync::Mutex`. Every operation takes the lock once, does its
//! read-modify-write and drops the guard before returning, so callers never
//! see a half-applied change and never hold the lock across their own I/O.
//! Lookups are a linear scan by exact id; the `Vec` keeps insertion order and
//! `Vec::remove` keeps the remaining items in place relative to each other.

use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::types::{Todo, TodoId};

#[derive(Debug)]
struct Inner {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Inner {
    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }
}

/// The authoritative todo collection. Construct one per process and share it
/// behind an `Arc`.
#[derive(Debug)]
pub struct TodoStore {
    inner: Mutex<Inner>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of every todo in insertion order.
    pub async fn list(&self) -> Vec<Todo> {
        self.inner.lock().await.todos.clone()
    }

    /// Append a new open todo and return it.
    ///
    /// Empty titles are rejected before the lock is taken, so a failed create
    /// neither mutates the collection nor consumes an id.
    pub async fn create(&self, title: impl Into<String>) -> Result<Todo, StoreError> {
        let title = title.into();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let mut inner = self.inner.lock().await;
        let todo = Todo {
            id: TodoId::new(inner.next_id),
            title,
            is_done: false,
        };
        inner.next_id += 1;
        inner.todos.push(todo.clone());
        drop(inner);

        tracing::debug!(id = %todo.id, "todo created");
        Ok(todo)
    }

    /// Set the done flag of the todo with `id` and return the updated item.
    pub async fn update_status(&self, id: TodoId, is_done: bool) -> Result<Todo, StoreError> {
        let mut inner = self.inner.lock().await;
        let index = inner.position(id).ok_or(StoreError::NotFound(id))?;
        let todo = &mut inner.todos[index];
        todo.is_done = is_done;
        let updated = todo.clone();
        drop(inner);

        tracing::debug!(%id, is_done, "todo status updated");
        Ok(updated)
    }

    /// Remove the todo with `id`. Its id is retired for good.
    pub async fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        let index = inner.position(id).ok_or(StoreError::NotFound(id))?;
        inner.todos.remove(index);
        drop(inner);

        tracing::debug!(%id, "todo deleted");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.todos.is_empty()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
