//! Shared deterministic types for reducer logic.
//!
//! These types define stable contracts between the slice reducers and the
//! composed reducer. They carry no I/O and serialize to a stable JSON shape.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::{Author, Book, Id};

/// Immutable sequence owned by one slice of the state.
///
/// Reducers never mutate a slice in place. An unchanged slice is returned as
/// the same `Arc`, so callers can detect "no change" with [`Arc::ptr_eq`].
pub type Slice<T> = Arc<[T]>;

/// Empty slice used when a reducer has no prior state.
pub fn empty_slice<T>() -> Slice<T> {
    Arc::from(Vec::new())
}

/// New slice holding `items` followed by `item`.
pub fn appended<T: Clone>(items: &[T], item: T) -> Slice<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    Arc::from(next)
}

/// New slice without the element at `index`; relative order is kept.
pub fn without_index<T: Clone>(items: &[T], index: usize) -> Slice<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Intended state change, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddBook { book: Book },
    RemoveBook { id: Id },
    AddAuthor { author: Author },
    RemoveAuthor { id: Id },
}

impl Action {
    /// Wire tag of this action (e.g. `ADD_BOOK`).
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddBook { .. } => "ADD_BOOK",
            Action::RemoveBook { .. } => "REMOVE_BOOK",
            Action::AddAuthor { .. } => "ADD_AUTHOR",
            Action::RemoveAuthor { .. } => "REMOVE_AUTHOR",
        }
    }
}
