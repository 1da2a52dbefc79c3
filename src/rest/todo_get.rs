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

//! API to get one todo.

use crate::driver::Driver;
use crate::model::TodoId;
use crate::rest::{EmptyBody, RestError};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use log::debug;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<TodoId>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    debug!("REST request to get todo {}", id.as_ref());

    match driver.get_todo(&id).await? {
        Some(todo) => Ok(Json(todo)),
        None => Err(RestError::NotFound(format!("Todo {} not found", id.as_ref()))),
    }
}
