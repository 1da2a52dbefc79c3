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

//! API to create a new todo.

use crate::driver::Driver;
use crate::model::TodoDto;
use crate::rest::httputils::creation_headers;
use crate::rest::{validate_todo, JsonBody, RestError};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::{http, Json};
use log::debug;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    JsonBody(dto): JsonBody<TodoDto>,
) -> Result<impl IntoResponse, RestError> {
    debug!("REST request to create a todo");

    validate_todo(&dto)?;
    if dto.id().is_some() {
        return Err(RestError::InvalidRequest("id must not be set on create".to_owned()));
    }

    let result = driver.save_todo(dto).await?;
    let id = match result.id() {
        Some(id) => id.clone(),
        None => return Err(RestError::InternalError("Saved todo has no id".to_owned())),
    };
    let headers = creation_headers("/api/todos", &id)?;
    Ok((http::StatusCode::CREATED, headers, Json(result)))
}
