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

//! Helpers to build the response headers used by the todos APIs.

use crate::model::PageRequest;
use crate::rest::{RestError, RestResult};
use axum::http::header::{HeaderMap, HeaderName, HeaderValue, LINK, LOCATION};

/// Name of the header carrying the informational alert message of a mutation.
const ALERT_HEADER: &str = "x-todos-alert";

/// Name of the header carrying the parameters of the alert message.
const ALERT_PARAMS_HEADER: &str = "x-todos-params";

/// Name of the header carrying the collection's total count in listings.
const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Converts `s` into a header value, flagging bad content as an internal fault.
fn to_header_value(s: &str) -> RestResult<HeaderValue> {
    HeaderValue::from_str(s).map_err(|e| RestError::InternalError(e.to_string()))
}

/// Builds the informational headers attached to responses that mutate one todo.  `action`
/// is the past-tense name of the mutation and `id` the affected todo.
pub(super) fn alert_headers(action: &str, id: &str) -> RestResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(ALERT_HEADER),
        to_header_value(&format!("todos.todo.{}", action))?,
    );
    headers.insert(HeaderName::from_static(ALERT_PARAMS_HEADER), to_header_value(id)?);
    Ok(headers)
}

/// Builds the creation headers for a newly persisted todo: the alert headers plus the
/// location of the new resource.
pub(super) fn creation_headers(path: &str, id: &str) -> RestResult<HeaderMap> {
    let mut headers = alert_headers("created", id)?;
    headers.insert(LOCATION, to_header_value(&format!("{}/{}", path, id))?);
    Ok(headers)
}

/// Renders the URI of the listing endpoint at `path` for a specific page offset.
fn page_uri(path: &str, page: &PageRequest, offset: u32) -> String {
    format!("{}?page={}&size={}&sort={}", path, offset, page.size(), page.sort())
}

/// Builds the pagination headers for a listing served at `path`: the collection's total
/// count plus links to the next and previous pages, when those exist.
pub(super) fn pagination_headers(
    path: &str,
    page: &PageRequest,
    total: u64,
) -> RestResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(TOTAL_COUNT_HEADER), HeaderValue::from(total));

    let mut links = vec![];
    let next_offset = (u64::from(*page.page()) + 1) * u64::from(*page.size());
    if next_offset < total {
        links.push(format!("<{}>; rel=\"next\"", page_uri(path, page, page.page() + 1)));
    }
    if *page.page() > 0 {
        links.push(format!("<{}>; rel=\"prev\"", page_uri(path, page, page.page() - 1)));
    }
    if !links.is_empty() {
        headers.insert(LINK, to_header_value(&links.join(","))?);
    }
    Ok(headers)
}
