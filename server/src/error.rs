//! HTTP error responses.
//!
//! # Design
//! Every failure a handler can produce is an `ApiError`, and every `ApiError`
//! renders as a JSON body `{"code": <status>, "message": <text>}` with the
//! same status on the response line. Nothing falls through to a plain-text
//! or empty error page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_core::StoreError;

/// Errors returned by request handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Malformed JSON, missing or empty field, or a non-integer id segment.
    #[error("{0}")]
    BadRequest(String),

    /// The addressed todo does not exist.
    #[error("Todo not found")]
    NotFound,

    /// The path exists but is not wired for this HTTP method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No route matches the path at all.
    #[error("Route not found")]
    RouteNotFound,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyTitle => ApiError::bad_request("Title is required"),
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), message = %self, "request rejected");

        let body = ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::TodoId;

    #[test]
    fn store_errors_map_to_status_codes() {
        let err = ApiError::from(StoreError::EmptyTitle);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Title is required");

        let err = ApiError::from(StoreError::NotFound(TodoId::new(3)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Todo not found");
    }

    #[test]
    fn method_not_allowed_is_405() {
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn response_status_matches_body_code() {
        let response = ApiError::bad_request("Invalid ID").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
