//! Test-only helpers for constructing records and actions.

use crate::core::types::Action;
use crate::model::{Author, Book, Id};

/// Create a book with a numeric id and no description.
pub fn book(id: u64, title: &str, author_name: &str) -> Book {
    Book {
        id: Id::Number(id),
        title: title.to_string(),
        author_name: author_name.to_string(),
        description: None,
    }
}

/// Create an author with a numeric id.
pub fn author(id: u64, author_name: &str) -> Author {
    Author {
        id: Id::Number(id),
        author_name: author_name.to_string(),
    }
}

pub fn add_book(id: u64, title: &str, author_name: &str) -> Action {
    Action::AddBook {
        book: book(id, title, author_name),
    }
}

pub fn remove_book(id: u64) -> Action {
    Action::RemoveBook { id: Id::Number(id) }
}

pub fn add_author(id: u64, author_name: &str) -> Action {
    Action::AddAuthor {
        author: author(id, author_name),
    }
}

pub fn remove_author(id: u64) -> Action {
    Action::RemoveAuthor { id: Id::Number(id) }
}

/// Serialize actions as a JSON Lines action log.
pub fn action_log(actions: &[Action]) -> String {
    actions
        .iter()
        .map(|action| serde_json::to_string(action).expect("serialize action"))
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}
