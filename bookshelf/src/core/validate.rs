//! Payload checks for actions and invariants for stored state.
//!
//! Checks return stable, human-readable messages in document order. An
//! empty list means the value is acceptable.

use std::collections::HashSet;

use crate::core::app::AppState;
use crate::core::types::Action;
use crate::model::{Author, Book, Id};

/// Check that an action carries a usable payload:
/// - Additions need a non-blank `title` / `authorName`
/// - Text ids must not be blank
///
/// Removal of an id that does not exist is not checked here; reducers treat it
/// as a no-op.
pub fn validate_action(action: &Action) -> Vec<String> {
    let mut errors = Vec::new();
    match action {
        Action::AddBook { book } => validate_book(book, "book", &mut errors),
        Action::AddAuthor { author } => validate_author(author, "author", &mut errors),
        Action::RemoveBook { id } | Action::RemoveAuthor { id } => {
            validate_id(id, "id", &mut errors);
        }
    }
    errors
}

/// Check that every stored record has a valid id and non-blank names.
pub fn validate_state(state: &AppState) -> Vec<String> {
    let mut errors = Vec::new();
    for (index, author) in state.authors.iter().enumerate() {
        validate_author(author, &format!("authors[{}]", index), &mut errors);
    }
    for (index, book) in state.books.iter().enumerate() {
        validate_book(book, &format!("books[{}]", index), &mut errors);
    }
    errors
}

/// Report ids that occur more than once within a slice.
///
/// Duplicates are reachable (the same `ADD_BOOK` dispatched twice), so they
/// are reported rather than treated as invalid. Removal only drops the first
/// match.
pub fn duplicate_ids(state: &AppState) -> Vec<String> {
    let mut notes = Vec::new();

    let mut seen = HashSet::new();
    for (index, author) in state.authors.iter().enumerate() {
        if !seen.insert(&author.id) {
            notes.push(format!("authors[{}]: duplicate author id '{}'", index, author.id));
        }
    }

    let mut seen = HashSet::new();
    for (index, book) in state.books.iter().enumerate() {
        if !seen.insert(&book.id) {
            notes.push(format!("books[{}]: duplicate book id '{}'", index, book.id));
        }
    }

    notes
}

fn validate_book(book: &Book, path: &str, errors: &mut Vec<String>) {
    validate_id(&book.id, &format!("{}.id", path), errors);
    if book.title.trim().is_empty() {
        errors.push(format!("{}.title must not be blank", path));
    }
    if book.author_name.trim().is_empty() {
        errors.push(format!("{}.authorName must not be blank", path));
    }
}

fn validate_author(author: &Author, path: &str, errors: &mut Vec<String>) {
    validate_id(&author.id, &format!("{}.id", path), errors);
    if author.author_name.trim().is_empty() {
        errors.push(format!("{}.authorName must not be blank", path));
    }
}

fn validate_id(id: &Id, path: &str, errors: &mut Vec<String>) {
    if matches!(id, Id::Text(text) if text.trim().is_empty()) {
        errors.push(format!("{} must not be blank", path));
    }
}
