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

//! Database abstraction in terms of the operations needed by the server.

use crate::model::{Page, PageRequest, Todo, TodoId};

pub mod sqlite;

/// Database errors.  Any unexpected errors that come from the database are classified as
/// `BackendError`, but errors we know about have more specific types.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DbError {
    /// Catch-all error type for unexpected database errors.
    #[error("Database error: {0}")]
    BackendError(String),

    /// Indicates a failure processing the data that already exists in the database.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),

    /// Indicates that a requested entry does not exist.
    #[error("Entity not found")]
    NotFound,
}

/// Result type for this module.
pub type DbResult<T> = Result<T, DbError>;

/// The document collection holding the todos, keyed by their string identifier.
#[async_trait::async_trait]
pub(crate) trait Store {
    /// Persists `todo` and returns the persisted entity.  A todo without an id gets a fresh
    /// one assigned; a todo that carries an id overwrites the record matching that id, or
    /// creates it if no such record exists.
    async fn save_todo(&self, todo: Todo) -> DbResult<Todo>;

    /// Gets the todo with the given `id`, if it exists.
    async fn find_todo(&self, id: &TodoId) -> DbResult<Option<Todo>>;

    /// Gets the requested `page` of todos along with the collection's total count.
    async fn find_todos(&self, page: &PageRequest) -> DbResult<Page<Todo>>;

    /// Deletes the todo with the given `id`.  Does nothing if it does not exist.
    async fn delete_todo(&self, id: &TodoId) -> DbResult<()>;

    /// Deletes every todo in the collection.  Exists for test isolation, not production use.
    async fn delete_all_todos(&self) -> DbResult<()>;
}
