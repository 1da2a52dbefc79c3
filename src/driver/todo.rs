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

//! Operations on one todo.

use crate::driver::{Driver, DriverResult};
use crate::model::{to_dto, to_entity, TodoDto, TodoId};

impl Driver {
    /// Deletes the todo with the given `id`, succeeding even if it does not exist.
    pub(crate) async fn delete_todo(self, id: &TodoId) -> DriverResult<()> {
        self.store.delete_todo(id).await?;
        Ok(())
    }

    /// Gets the todo with the given `id`, if it exists.
    pub(crate) async fn get_todo(self, id: &TodoId) -> DriverResult<Option<TodoDto>> {
        let todo = self.store.find_todo(id).await?;
        Ok(todo.map(to_dto))
    }

    /// Persists `dto` and returns the persisted todo, with its id filled in when new.
    ///
    /// Creation and update are the same operation down here: the store upserts on the id.
    /// Telling the two apart, based on the presence of the id, is the REST layer's job.
    pub(crate) async fn save_todo(self, dto: TodoDto) -> DriverResult<TodoDto> {
        let todo = self.store.save_todo(to_entity(dto)).await?;
        Ok(to_dto(todo))
    }
}
