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

//! Implementation of the store on top of SQLite.

use crate::db::{DbError, DbResult, Store};
use crate::model::{Page, PageRequest, Todo, TodoId};
use futures::TryStreamExt;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use uuid::Uuid;

/// Schema to apply to new databases.
const SCHEMA: &str = include_str!("sqlite.sql");

/// Takes a raw sqlx error `e` and converts it to our generic error type.
fn map_sqlx_error(e: sqlx::Error) -> DbError {
    match e {
        sqlx::Error::ColumnDecode { source, .. } => DbError::DataIntegrityError(source.to_string()),
        sqlx::Error::RowNotFound => DbError::NotFound,
        e => DbError::BackendError(e.to_string()),
    }
}

/// Rebuilds a todo from one row of the `todos` table.
fn todo_from_row(row: &SqliteRow) -> DbResult<Todo> {
    let id: String = row.try_get("id").map_err(map_sqlx_error)?;
    let title: String = row.try_get("title").map_err(map_sqlx_error)?;
    let description: String = row.try_get("description").map_err(map_sqlx_error)?;
    Ok(Todo::new(Some(TodoId::new(id)), Some(title), Some(description)))
}

/// A store backed by a SQLite database.
#[derive(Clone)]
pub struct SqliteStore {
    /// Shared SQLite connection pool.  This is a cloneable type that all concurrent
    /// operations can use.
    pool: SqlitePool,
}

/// Creates a new store against `conn_str`.
///
/// Callers are responsible for invoking `init_schema` on the returned store before issuing
/// any operation against it.
pub async fn connect(conn_str: &str) -> DbResult<SqliteStore> {
    // An in-memory database exists per connection, so the pool must never open a second one.
    let options = if conn_str == ":memory:" {
        SqlitePoolOptions::new().max_connections(1).idle_timeout(None).max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };
    let pool = options.connect(conn_str).await.map_err(map_sqlx_error)?;
    Ok(SqliteStore { pool })
}

impl SqliteStore {
    /// Initializes the database schema.
    pub async fn init_schema(&self) -> DbResult<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Store for SqliteStore {
    async fn save_todo(&self, todo: Todo) -> DbResult<Todo> {
        let id = match todo.id() {
            Some(id) => id.clone(),
            None => TodoId::new(Uuid::new_v4().to_string()),
        };

        let query_str = "
            INSERT INTO todos (id, title, description)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title, description = excluded.description
        ";
        let done = sqlx::query(query_str)
            .bind(id.as_ref())
            .bind(todo.title().as_deref())
            .bind(todo.description().as_deref())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        if done.rows_affected() != 1 {
            return Err(DbError::BackendError("Upsert affected more than one row".to_owned()));
        }

        Ok(Todo::new(Some(id), todo.title().clone(), todo.description().clone()))
    }

    async fn find_todo(&self, id: &TodoId) -> DbResult<Option<Todo>> {
        let query_str = "SELECT id, title, description FROM todos WHERE id = ?";
        let maybe_row = sqlx::query(query_str)
            .bind(id.as_ref())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        match maybe_row {
            None => Ok(None),
            Some(row) => Ok(Some(todo_from_row(&row)?)),
        }
    }

    async fn find_todos(&self, page: &PageRequest) -> DbResult<Page<Todo>> {
        let total = {
            let query_str = "SELECT COUNT(*) AS count FROM todos";
            let row =
                sqlx::query(query_str).fetch_one(&self.pool).await.map_err(map_sqlx_error)?;
            let count: i64 = row.try_get("count").map_err(map_sqlx_error)?;
            u64::try_from(count).map_err(|e| DbError::DataIntegrityError(e.to_string()))?
        };

        // The sort column comes from an allowlisted enum so it is safe to splice into the
        // query; the remaining parameters are bound as usual.
        let query_str = format!(
            "SELECT id, title, description FROM todos ORDER BY {} {} LIMIT ? OFFSET ?",
            page.sort().field().column(),
            page.sort().direction()
        );
        let mut rows = sqlx::query(&query_str)
            .bind(i64::from(*page.size()))
            .bind(page.offset())
            .fetch(&self.pool);

        let mut todos = vec![];
        while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
            todos.push(todo_from_row(&row)?);
        }
        Ok(Page::new(todos, total))
    }

    async fn delete_todo(&self, id: &TodoId) -> DbResult<()> {
        let query_str = "DELETE FROM todos WHERE id = ?";
        let done = sqlx::query(query_str)
            .bind(id.as_ref())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        // Zero affected rows is fine: deletions are idempotent by contract.
        if done.rows_affected() > 1 {
            return Err(DbError::BackendError("Deletion affected more than one row".to_owned()));
        }
        Ok(())
    }

    async fn delete_all_todos(&self) -> DbResult<()> {
        let query_str = "DELETE FROM todos";
        sqlx::query(query_str).execute(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

/// Test utilities for the SQLite store.
#[cfg(test)]
pub(crate) mod testutils {
    use super::*;

    /// Initializes an in-memory store for tests.
    pub(crate) async fn setup() -> SqliteStore {
        let _can_fail = env_logger::builder().is_test(true).try_init();
        let store = connect(":memory:").await.unwrap();
        store.init_schema().await.unwrap();
        store
    }
}
