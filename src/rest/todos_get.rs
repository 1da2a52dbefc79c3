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

//! API to list the todos.

use crate::driver::Driver;
use crate::model::{PageRequest, Sort};
use crate::rest::httputils::pagination_headers;
use crate::rest::{EmptyBody, QueryParams, RestError};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use log::debug;
use serde::Deserialize;

/// Page size to use when the request does not name one.
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Query parameters accepted by this API.
#[derive(Deserialize)]
pub(crate) struct ListQuery {
    /// Zero-based page offset to return.
    page: Option<u32>,

    /// Number of todos per page.
    size: Option<u32>,

    /// Sort criteria as `field` or `field,direction`.
    sort: Option<String>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    QueryParams(query): QueryParams<ListQuery>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    debug!("REST request to list todos");

    let sort = match query.sort {
        Some(sort) => sort.parse::<Sort>()?,
        None => Sort::default(),
    };
    let size = query.size.unwrap_or(DEFAULT_PAGE_SIZE);
    if size == 0 {
        // A zero-sized page would make the next-page links loop forever.
        return Err(RestError::InvalidRequest("size must be greater than zero".to_owned()));
    }
    let page = PageRequest::new(query.page.unwrap_or(0), size, sort);

    let todos = driver.list_todos(&page).await?;
    let headers = pagination_headers("/api/todos", &page, *todos.total())?;
    Ok((headers, Json(todos.into_items())))
}
