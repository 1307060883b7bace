//! Handlers for `/todos` and `/todos/{id}`.
//!
//! Each handler decodes its input, makes exactly one `TodoStore` call and
//! encodes the result. The store lock is released before serialization.

use axum::{extract::State, http::StatusCode, Json};
use todo_core::{CreateTodo, Todo, UpdateTodoStatus};

use crate::error::ApiError;
use crate::extract::{JsonBody, TodoIdParam};
use crate::AppState;

/// `GET /todos`
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.store.list().await)
}

/// `POST /todos`
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.store.create(input.title).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PUT /todos/{id}`
pub async fn update_todo_status(
    State(state): State<AppState>,
    TodoIdParam(id): TodoIdParam,
    JsonBody(input): JsonBody<UpdateTodoStatus>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.update_status(id, input.is_done).await?;
    Ok(Json(todo))
}

/// `DELETE /todos/{id}`
pub async fn delete_todo(
    State(state): State<AppState>,
    TodoIdParam(id): TodoIdParam,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Any method not wired on a known path.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Any path outside the todo routes.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
