//! HTTP front end for the in-memory todo store.
//!
//! # Routes
//! | Method | Path          | Success                |
//! |--------|---------------|------------------------|
//! | GET    | `/todos`      | 200, array of todos    |
//! | POST   | `/todos`      | 201, created todo      |
//! | PUT    | `/todos/{id}` | 200, updated todo      |
//! | DELETE | `/todos/{id}` | 204, empty body        |
//!
//! Other methods on these paths (HEAD included) get 405, other paths 404, and
//! every error carries a `{"code", "message"}` JSON body. `{id}` is everything
//! after `/todos/`; a remainder that is not an integer is a 400.

use std::{future::Future, sync::Arc};

use axum::{
    routing::{get, put},
    Router,
};
use todo_core::TodoStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;

pub use config::ServerConfig;
pub use error::ApiError;

/// Shared handler state. Cloning is cheap; every clone points at the same
/// store.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub store: Arc<TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }
}

pub fn router(state: AppState) -> Router {
    // The id is the whole remainder after `/todos/`, so the bare prefix and
    // multi-segment remainders reach the item handlers and fail id parsing.
    let item = put(handlers::update_todo_status)
        .delete(handlers::delete_todo)
        .fallback(handlers::method_not_allowed);

    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos)
                .post(handlers::create_todo)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .route("/todos/", item.clone())
        .route("/todos/{*id}", item)
        .fallback(handlers::route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Router over a fresh, empty store.
pub fn app() -> Router {
    router(AppState::default())
}

/// Serve `state` on `listener` until `shutdown` resolves, then let in-flight
/// requests finish.
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
