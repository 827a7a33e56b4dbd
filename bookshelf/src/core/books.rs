//! Books slice reducer.

use crate::core::reducer::Reducer;
use crate::core::types::{Action, Slice, appended, empty_slice, without_index};
use crate::model::Book;

/// Owns the `books` slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooksReducer;

impl Reducer<Action> for BooksReducer {
    type State = Slice<Book>;

    fn reduce(&self, state: Option<&Slice<Book>>, action: &Action) -> Slice<Book> {
        let books = state.cloned().unwrap_or_else(empty_slice);
        match action {
            Action::AddBook { book } => appended(&books, book.clone()),
            Action::RemoveBook { id } => {
                let found = books.iter().position(|book| book.id == *id);
                match found {
                    Some(index) => without_index(&books, index),
                    None => books,
                }
            }
            Action::AddAuthor { .. } | Action::RemoveAuthor { .. } => books,
        }
    }
}
