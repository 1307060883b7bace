//! Request extractors that reject with `ApiError` instead of axum's
//! plain-text rejections.
//!
//! # Design
//! axum's own `Json` and `Path` extractors answer 415/422 or a text body for
//! bad input. The todo API promises a JSON 400 for every malformed request,
//! so both extractors are wrapped here and all their rejections collapse to
//! `ApiError::BadRequest`. `JsonBody` also skips the Content-Type check.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use todo_core::TodoId;

use crate::error::ApiError;

/// JSON request body decoded with `serde_json`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::bad_request("Invalid request body"))?;
        decode(&bytes).map(JsonBody)
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|err| {
        tracing::debug!(error = %err, "rejecting request body");
        ApiError::bad_request("Invalid request body")
    })
}

/// Everything after `/todos/`, parsed as a `TodoId`.
#[derive(Debug, Clone, Copy)]
pub struct TodoIdParam(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            // `/todos/` has no remainder to capture.
            Err(_) => String::new(),
        };
        parse_id(&raw).map(TodoIdParam)
    }
}

/// Parse the path remainder into a `TodoId`.
///
/// Anything that is not a decimal `i64` is a 400 "Invalid ID". Integers
/// below 1 are well-formed but can never have been assigned, so they are a
/// 404 without consulting the store.
pub fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    let value: i64 = raw
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid ID"))?;
    u64::try_from(value)
        .ok()
        .filter(|&id| id >= 1)
        .map(TodoId::new)
        .ok_or(ApiError::NotFound)
}
