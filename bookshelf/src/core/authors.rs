//! Authors slice reducer.
//!
//! Besides its own actions, this slice observes `ADD_BOOK`: a book whose
//! `authorName` is not yet known adds a synthesized author. Matching is by
//! exact name, so dispatching the same book twice never duplicates an author.

use crate::core::ids::IdStrategy;
use crate::core::reducer::Reducer;
use crate::core::types::{Action, Slice, appended, empty_slice, without_index};
use crate::model::Author;

/// Owns the `authors` slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorsReducer {
    /// Id source for authors derived from `ADD_BOOK`.
    pub ids: IdStrategy,
}

impl AuthorsReducer {
    pub fn new(ids: IdStrategy) -> Self {
        Self { ids }
    }
}

impl Reducer<Action> for AuthorsReducer {
    type State = Slice<Author>;

    fn reduce(&self, state: Option<&Slice<Author>>, action: &Action) -> Slice<Author> {
        let authors = state.cloned().unwrap_or_else(empty_slice);
        match action {
            Action::AddAuthor { author } => appended(&authors, author.clone()),
            Action::RemoveAuthor { id } => {
                let found = authors.iter().position(|author| author.id == *id);
                match found {
                    Some(index) => without_index(&authors, index),
                    None => authors,
                }
            }
            Action::AddBook { book } => {
                if authors
                    .iter()
                    .any(|author| author.author_name == book.author_name)
                {
                    return authors;
                }
                let author = Author {
                    id: self.ids.next_id(authors.iter().map(|author| &author.id)),
                    author_name: book.author_name.clone(),
                };
                appended(&authors, author)
            }
            Action::RemoveBook { .. } => authors,
        }
    }
}
