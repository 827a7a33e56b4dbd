//! Application state composed from the authors and books slices.

use serde::{Deserialize, Serialize};

use crate::combine_reducers;
use crate::core::authors::AuthorsReducer;
use crate::core::books::BooksReducer;
use crate::core::ids::IdStrategy;
use crate::core::types::Action;

combine_reducers! {
    /// Full application state. Absent slices deserialize as empty.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct AppState;

    /// Top-level reducer over [`AppState`].
    #[derive(Debug, Clone, Copy, Default)]
    pub struct AppReducer for Action {
        authors: AuthorsReducer,
        books: BooksReducer,
    }
}

impl AppReducer {
    pub fn new(ids: IdStrategy) -> Self {
        Self {
            authors: AuthorsReducer::new(ids),
            books: BooksReducer,
        }
    }
}
