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

//! High-level data types.

use derive_getters::Getters;
use derive_more::{AsRef, Constructor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indicates a problem constructing a model type from raw data.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub(crate) struct ModelError(pub(crate) String);

/// Newtype pattern for the store-assigned identifier of a todo.
#[derive(AsRef, Clone, Constructor, Deserialize, Eq, PartialEq)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct TodoId(String);

/// A todo item as persisted in the store.
///
/// `title` and `description` mirror the transfer shape field for field, including their
/// optionality: presence of the required fields is enforced at the HTTP boundary, not by
/// these types, so that the mapping between the two shapes stays a total function.
#[derive(Clone, Constructor, Getters)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct Todo {
    /// Identifier assigned by the store on first save.  Never reassigned afterwards.
    id: Option<TodoId>,

    /// Short name of the todo.
    title: Option<String>,

    /// Free-form details of the todo.
    description: Option<String>,
}

/// Wire representation of a todo.
#[derive(Clone, Constructor, Deserialize, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct TodoDto {
    /// Identifier of the todo, absent when the todo has not been persisted yet.
    id: Option<String>,

    /// Short name of the todo.
    title: Option<String>,

    /// Free-form details of the todo.
    description: Option<String>,
}

/// Converts a persisted todo into its transfer shape.  Field-for-field copy.
pub(crate) fn to_dto(todo: Todo) -> TodoDto {
    TodoDto { id: todo.id.map(|id| id.0), title: todo.title, description: todo.description }
}

/// Converts a transfer shape into the persisted shape.  Field-for-field copy that keeps a
/// missing id as missing, which is what tells the store to treat the todo as new.
pub(crate) fn to_entity(dto: TodoDto) -> Todo {
    Todo { id: dto.id.map(TodoId::new), title: dto.title, description: dto.description }
}

/// Fields of a todo that a listing may be sorted by.
///
/// Keeping this as an enum (instead of a free-form string) is what makes it safe for the
/// store to splice the corresponding column name into a query.
#[derive(Clone, Copy, Eq, PartialEq)]
#[cfg_attr(test, derive(Debug))]
pub(crate) enum SortField {
    /// Sort by the store-assigned identifier.
    Id,

    /// Sort by the todo's title.
    Title,

    /// Sort by the todo's description.
    Description,
}

impl SortField {
    /// Returns the store column backing this field.  Also its public name in query strings.
    pub(crate) fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Description => "description",
        }
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "description" => Ok(SortField::Description),
            s => Err(ModelError(format!("Unknown sort field '{}'", s))),
        }
    }
}

/// Sort criteria for a listing: a field and a direction.
#[derive(Clone, Copy, Eq, PartialEq)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Sort {
    /// The field to order the listing by.
    field: SortField,

    /// Whether the listing is in ascending order.
    ascending: bool,
}

impl Sort {
    /// Creates new sort criteria over `field` in the direction given by `ascending`.
    pub(crate) fn new(field: SortField, ascending: bool) -> Self {
        Self { field, ascending }
    }

    /// Returns the field the listing is ordered by.
    pub(crate) fn field(&self) -> SortField {
        self.field
    }

    /// Returns the SQL ordering keyword for the direction of this sort.
    pub(crate) fn direction(&self) -> &'static str {
        if self.ascending { "ASC" } else { "DESC" }
    }
}

impl Default for Sort {
    fn default() -> Self {
        Sort::new(SortField::Id, true)
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field.column(), if self.ascending { "asc" } else { "desc" })
    }
}

impl FromStr for Sort {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, ascending) = match s.split_once(',') {
            None => (s, true),
            Some((field, "asc")) => (field, true),
            Some((field, "desc")) => (field, false),
            Some((_, direction)) => {
                return Err(ModelError(format!("Unknown sort direction '{}'", direction)));
            }
        };
        Ok(Sort::new(SortField::from_str(field)?, ascending))
    }
}

/// A page of a collection to fetch: a zero-based page offset, the page size and the sort
/// criteria to apply before slicing the collection.
#[derive(Clone, Constructor, Getters)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct PageRequest {
    /// Zero-based index of the page to fetch.
    page: u32,

    /// Maximum number of entities in the page.
    size: u32,

    /// Sort criteria to apply to the collection before slicing it.
    sort: Sort,
}

impl PageRequest {
    /// Returns the number of entities that precede this page.
    pub(crate) fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::new(0, 20, Sort::default())
    }
}

/// One page of `items` out of a collection holding `total` entities overall.
#[derive(Constructor, Getters)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct Page<T> {
    /// The slice of the collection covered by this page, in sort order.
    items: Vec<T>,

    /// Number of entities in the whole collection, not just in this page.
    total: u64,
}

impl<T> Page<T> {
    /// Applies `f` to every item in the page, preserving the total count.
    pub(crate) fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page { items: self.items.into_iter().map(f).collect(), total: self.total }
    }

    /// Consumes the page and returns its items.
    pub(crate) fn into_items(self) -> Vec<T> {
        self.items
    }
}
