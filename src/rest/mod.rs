// Todos
// Copyright 2026 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Entry point to the REST server.
//!
//! Every API lives in its own `.rs` file, named `<entity>_<method>.rs`, together with its
//! integration tests.  The `tests` module within an API defines a `route` function that
//! returns the HTTP method and path under test, and all tests in the module rely on it.

use crate::driver::{Driver, DriverError};
use crate::model::{ModelError, TodoDto};
use async_trait::async_trait;
use axum::body::HttpBody;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http;
use axum::http::request::Parts;
use axum::response::IntoResponse;
use axum::{Json, Router};
use log::error;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

mod httputils;
#[cfg(test)]
pub(crate) mod testutils;
mod todo_delete;
mod todo_get;
mod todos_get;
mod todos_post;
mod todos_put;

/// Frontend errors.  These are the errors that are visible to the user on failed requests.
#[derive(Debug, PartialEq, thiserror::Error)]
pub(crate) enum RestError {
    /// Catch-all error type for all unexpected errors.
    #[error("{0}")]
    InternalError(String),

    /// Indicates an error in the contents of the request.
    #[error("{0}")]
    InvalidRequest(String),

    /// Indicates that a requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Indicates that a request that should have empty content did not.
    #[error("Content should be empty")]
    PayloadNotEmpty,

    /// Indicates that the request body violates the transfer shape's field constraints.
    #[error("{message}")]
    Validation {
        /// Summary of the failure.
        message: String,

        /// The individual field constraint violations.
        field_errors: Vec<FieldError>,
    },
}

impl From<DriverError> for RestError {
    fn from(e: DriverError) -> Self {
        match e {
            DriverError::BackendError(_) => RestError::InternalError(e.to_string()),
            DriverError::NotFound(_) => RestError::NotFound(e.to_string()),
        }
    }
}

impl From<ModelError> for RestError {
    fn from(e: ModelError) -> Self {
        RestError::InvalidRequest(e.to_string())
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> axum::response::Response {
        let (status, response) = match self {
            RestError::InternalError(message) => {
                // Backend details must not leak to the client, so log them here and reply
                // with a generic fault.
                error!("Internal error: {}", message);
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal error".to_owned()),
                )
            }
            RestError::InvalidRequest(message) => {
                (http::StatusCode::BAD_REQUEST, ErrorResponse::new(message))
            }
            RestError::NotFound(_) => {
                // Missing entities are reported with an empty body, not a JSON error.
                return http::StatusCode::NOT_FOUND.into_response();
            }
            RestError::PayloadNotEmpty => (
                http::StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse::new(RestError::PayloadNotEmpty.to_string()),
            ),
            RestError::Validation { message, field_errors } => {
                (http::StatusCode::BAD_REQUEST, ErrorResponse { message, field_errors })
            }
        };

        (status, Json(response)).into_response()
    }
}

/// Result type for this module.
pub(crate) type RestResult<T> = Result<T, RestError>;

/// Details of one field constraint violation.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct FieldError {
    /// Name of the offending field.
    pub(crate) field: String,

    /// Description of the violated constraint.
    pub(crate) message: String,
}

impl FieldError {
    /// Creates a new violation report for `field`.
    fn new(field: &str, message: &str) -> Self {
        Self { field: field.to_owned(), message: message.to_owned() }
    }
}

/// Representation of the details of an error response.
#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct ErrorResponse {
    /// Textual representation of the error message.
    pub(crate) message: String,

    /// Per-field violations, present only when the failure is a validation error.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) field_errors: Vec<FieldError>,
}

impl ErrorResponse {
    /// Creates an error response carrying just a `message`.
    fn new(message: String) -> Self {
        Self { message, field_errors: vec![] }
    }
}

/// Checks the field constraints of `dto`.
///
/// This runs before any handler acts on the decoded body, standing in for the declarative
/// constraints that the transfer shape carries in spirit: `title` and `description` are
/// required and must not be null.
fn validate_todo(dto: &TodoDto) -> RestResult<()> {
    let mut field_errors = vec![];
    if dto.title().is_none() {
        field_errors.push(FieldError::new("title", "must not be null"));
    }
    if dto.description().is_none() {
        field_errors.push(FieldError::new("description", "must not be null"));
    }
    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(RestError::Validation { message: "Validation failed".to_owned(), field_errors })
    }
}

/// A request body extractor that forbids any content.
///
/// Any API that doesn't expect a body should use this to ensure we don't get garbage data
/// that we don't care about.  This future-proofs the service.
pub(crate) struct EmptyBody {}

#[async_trait]
impl<S> FromRequest<S> for EmptyBody
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        if req.into_body().is_end_stream() {
            Ok(EmptyBody {})
        } else {
            Err(RestError::PayloadNotEmpty)
        }
    }
}

/// A request body extractor that decodes a JSON payload of type `T`.
///
/// This exists so that malformed payloads surface as a `RestError` and thus carry the same
/// JSON error body as every other failure, instead of axum's plain-text rejection.
pub(crate) struct JsonBody<T>(pub(crate) T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(e) => Err(RestError::InvalidRequest(e.body_text())),
        }
    }
}

/// A query string extractor that decodes the parameters into a `T`.
///
/// Same rationale as `JsonBody`: malformed parameters become a `RestError` instead of
/// axum's plain-text rejection.
pub(crate) struct QueryParams<T>(pub(crate) T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(QueryParams(value)),
            Err(e) => Err(RestError::InvalidRequest(e.body_text())),
        }
    }
}

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::get;
    Router::new()
        .route(
            "/api/todos",
            get(todos_get::handler).post(todos_post::handler).put(todos_put::handler),
        )
        .route("/api/todos/:id", get(todo_get::handler).delete(todo_delete::handler))
        .with_state(driver)
}
