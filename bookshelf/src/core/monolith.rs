//! Single reducer over the whole [`AppState`].
//!
//! Equivalent to [`AppReducer`](crate::core::app::AppReducer) but written as one
//! function that handles every action against the full state. Kept as the
//! baseline the composed reducer is checked against.

use crate::core::app::AppState;
use crate::core::ids::IdStrategy;
use crate::core::types::{Action, appended, without_index};
use crate::model::Author;

/// Apply `action` to `state` (or to an empty state when `None`).
pub fn reduce(state: Option<&AppState>, action: &Action, ids: IdStrategy) -> AppState {
    let prior = state.cloned().unwrap_or_default();
    match action {
        Action::AddBook { book } => {
            let known = prior
                .authors
                .iter()
                .any(|author| author.author_name == book.author_name);
            let authors = if known {
                prior.authors
            } else {
                let author = Author {
                    id: ids.next_id(prior.authors.iter().map(|author| &author.id)),
                    author_name: book.author_name.clone(),
                };
                appended(&prior.authors, author)
            };
            AppState {
                authors,
                books: appended(&prior.books, book.clone()),
            }
        }
        Action::RemoveBook { id } => {
            let found = prior.books.iter().position(|book| book.id == *id);
            match found {
                Some(index) => AppState {
                    books: without_index(&prior.books, index),
                    ..prior
                },
                None => prior,
            }
        }
        Action::AddAuthor { author } => AppState {
            authors: appended(&prior.authors, author.clone()),
            ..prior
        },
        Action::RemoveAuthor { id } => {
            let found = prior.authors.iter().position(|author| author.id == *id);
            match found {
                Some(index) => AppState {
                    authors: without_index(&prior.authors, index),
                    ..prior
                },
                None => prior,
            }
        }
    }
}
