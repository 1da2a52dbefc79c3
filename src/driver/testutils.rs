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

//! Test utilities for the business layer.

use crate::db::sqlite::{testutils, SqliteStore};
use crate::db::Store;
use crate::driver::Driver;
use crate::model::Todo;
use std::sync::Arc;

/// State of a running test, tying together a store and the driver under test.
pub(crate) struct TestContext {
    /// The store that backs the driver.
    store: Arc<SqliteStore>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes an in-memory store and a driver on top of it.
    pub(crate) async fn setup() -> Self {
        let store = Arc::from(testutils::setup().await);
        let driver = Driver::new(store.clone());
        Self { store, driver }
    }

    /// Returns the store backing the driver, for direct data manipulation.
    pub(crate) fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Returns a driver clone to execute one operation against.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Inserts a todo with `title` and `description` directly into the store and returns
    /// its assigned id as a raw string.
    pub(crate) async fn insert_todo(&self, title: &str, description: &str) -> String {
        let todo = Todo::new(None, Some(title.to_owned()), Some(description.to_owned()));
        let todo = self.store.save_todo(todo).await.unwrap();
        todo.id().as_ref().unwrap().as_ref().clone()
    }
}
