//! Property tests for reducer composition.
//!
//! Random action sequences over a small id and name space, so removals and
//! repeated authors actually collide.

use std::collections::HashSet;
use std::sync::Arc;

use bookshelf::core::app::{AppReducer, AppState};
use bookshelf::core::authors::AuthorsReducer;
use bookshelf::core::books::BooksReducer;
use bookshelf::core::ids::IdStrategy;
use bookshelf::core::monolith;
use bookshelf::core::reducer::Reducer;
use bookshelf::core::types::Action;
use bookshelf::test_support::{add_author, add_book, remove_author, remove_book};
use proptest::prelude::*;

const NAMES: &[&str] = &[
    "Neal Stephenson",
    "Ursula K. Le Guin",
    "Octavia E. Butler",
    "Iain M. Banks",
];

fn action_strategy() -> impl Strategy<Value = Action> {
    let name = prop::sample::select(NAMES);
    prop_oneof![
        (0u64..6, name.clone()).prop_map(|(id, author)| add_book(id, "Title", author)),
        (0u64..6).prop_map(remove_book),
        (0u64..6, name).prop_map(|(id, author)| add_author(id, author)),
        (0u64..6).prop_map(remove_author),
    ]
}

fn book_actions_strategy() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(
        prop_oneof![
            (0u64..6, prop::sample::select(NAMES))
                .prop_map(|(id, author)| add_book(id, "Title", author)),
            (0u64..6).prop_map(remove_book),
        ],
        0..24,
    )
}

/// Ids near both ends of the numeric range.
fn edge_id_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![0u64..4, (u64::MAX - 3)..=u64::MAX]
}

fn run<R: Reducer<Action>>(reducer: &R, actions: &[Action]) -> Option<R::State> {
    let mut state = None;
    for action in actions {
        state = Some(reducer.reduce(state.as_ref(), action));
    }
    state
}

proptest! {
    /// Composed state equals each slice reducer run on its own.
    #[test]
    fn composed_state_decomposes_by_slice(actions in prop::collection::vec(action_strategy(), 1..24)) {
        let composed = run(&AppReducer::default(), &actions).expect("state");
        let authors = run(&AuthorsReducer::default(), &actions).expect("authors");
        let books = run(&BooksReducer, &actions).expect("books");

        prop_assert_eq!(&composed.authors, &authors);
        prop_assert_eq!(&composed.books, &books);
    }

    /// The composed reducer agrees with the single-function reducer.
    #[test]
    fn composed_matches_monolith(actions in prop::collection::vec(action_strategy(), 0..24)) {
        let reducer = AppReducer::default();
        let mut composed: Option<AppState> = None;
        let mut single: Option<AppState> = None;
        for action in &actions {
            composed = Some(reducer.reduce(composed.as_ref(), action));
            single = Some(monolith::reduce(single.as_ref(), action, IdStrategy::Sequential));
        }
        prop_assert_eq!(composed, single);
    }

    /// Without ADD_AUTHOR, each author name appears at most once.
    #[test]
    fn add_book_never_duplicates_author_names(actions in book_actions_strategy()) {
        let state = run(&AppReducer::default(), &actions).unwrap_or_default();
        let names: HashSet<&str> = state.authors.iter().map(|a| a.author_name.as_str()).collect();
        prop_assert_eq!(names.len(), state.authors.len());
    }

    /// Removing an absent id keeps slice identity and contents.
    #[test]
    fn removing_absent_id_is_identity(actions in prop::collection::vec(action_strategy(), 0..24)) {
        let reducer = AppReducer::default();
        let state = run(&reducer, &actions).unwrap_or_default();

        let next = reducer.reduce(Some(&state), &remove_book(1_000));
        prop_assert!(Arc::ptr_eq(&state.books, &next.books));
        prop_assert!(Arc::ptr_eq(&state.authors, &next.authors));

        let next = reducer.reduce(Some(&state), &remove_author(1_000));
        prop_assert_eq!(&state, &next);
    }

    /// A synthesized author id is never already held by the prior slice.
    #[test]
    fn synthesized_author_id_is_unused(
        ids in prop::collection::vec(edge_id_strategy(), 0..8),
        strategy in prop_oneof![Just(IdStrategy::Sequential), Just(IdStrategy::Uuid)],
    ) {
        let reducer = AuthorsReducer::new(strategy);
        let mut authors = None;
        for (index, id) in ids.iter().enumerate() {
            let name = format!("Author {}", index);
            authors = Some(reducer.reduce(authors.as_ref(), &add_author(*id, &name)));
        }
        let prior = authors.unwrap_or_else(|| Arc::from(Vec::new()));

        let next = reducer.reduce(Some(&prior), &add_book(1, "Title", "Someone New"));
        prop_assert_eq!(next.len(), prior.len() + 1);
        let fresh = &next[prior.len()].id;
        prop_assert!(prior.iter().all(|author| &author.id != fresh));
    }

    /// Book actions leave authors untouched unless a new name appears.
    #[test]
    fn books_ignore_author_actions(id in 0u64..6, name in prop::sample::select(NAMES)) {
        let reducer = AppReducer::default();
        let state = reducer.reduce(None, &add_book(id, "Title", name));

        let next = reducer.reduce(Some(&state), &add_author(id, name));
        prop_assert!(Arc::ptr_eq(&state.books, &next.books));

        let next = reducer.reduce(Some(&state), &add_book(id + 1, "Other", name));
        prop_assert!(Arc::ptr_eq(&state.authors, &next.authors));
    }
}

#[test]
fn snow_crash_example_produces_expected_state() {
    let state = AppReducer::default().reduce(
        Some(&AppState::default()),
        &add_book(1, "Snow Crash", "Neal Stephenson"),
    );
    let json = serde_json::to_value(&state).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "authors": [{"id": 1, "authorName": "Neal Stephenson"}],
            "books": [{"id": 1, "title": "Snow Crash", "authorName": "Neal Stephenson"}]
        })
    );
}
