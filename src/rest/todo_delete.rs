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

//! API to delete a todo.

use crate::driver::Driver;
use crate::model::TodoId;
use crate::rest::httputils::alert_headers;
use crate::rest::{EmptyBody, RestError};
use axum::extract::{Path, State};
use axum::http;
use axum::response::IntoResponse;
use log::debug;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<TodoId>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    debug!("REST request to delete todo {}", id.as_ref());

    driver.delete_todo(&id).await?;

    // 204 regardless of prior existence: deletions are idempotent.
    let headers = alert_headers("deleted", id.as_ref())?;
    Ok((http::StatusCode::NO_CONTENT, headers))
}
