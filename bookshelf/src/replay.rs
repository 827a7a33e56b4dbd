//! Apply actions to the stored state for `bookshelf dispatch` and `bookshelf replay`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::app::{AppReducer, AppState};
use crate::core::types::Action;
use crate::io::action_log::{ActionSchema, parse_action, read_action_log};
use crate::io::config::load_config;
use crate::io::init::BookshelfPaths;
use crate::io::state_store::{load_state, write_state};
use crate::store::Store;

/// Summary of a dispatch or replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOutcome {
    /// Actions applied in this call.
    pub applied: usize,
    pub authors: usize,
    pub books: usize,
}

impl ReplayOutcome {
    fn new(applied: usize, state: &AppState) -> Self {
        Self {
            applied,
            authors: state.authors.len(),
            books: state.books.len(),
        }
    }
}

/// Apply `actions` in order to `state`.
///
/// Stops at the first rejected action; the error names its 1-based position.
pub fn apply_actions(
    reducer: AppReducer,
    state: AppState,
    actions: &[Action],
) -> Result<AppState> {
    let mut store = Store::with_state(reducer, state);
    for (index, action) in actions.iter().enumerate() {
        store
            .dispatch(action)
            .with_context(|| format!("action {}", index + 1))?;
    }
    Ok(store.into_state())
}

/// Parse one JSON action and apply it to the state under `root`.
pub fn dispatch_from_root(root: &Path, raw_action: &str) -> Result<ReplayOutcome> {
    let paths = BookshelfPaths::new(root);
    let schema = ActionSchema::embedded()?;
    let action = parse_action(&schema, raw_action)?;
    apply_and_persist(&paths, &[action])
}

/// Apply every action in the JSON Lines file at `log_path` to the state under `root`.
///
/// The state file is written once, after all actions succeed.
pub fn replay_from_root(root: &Path, log_path: &Path) -> Result<ReplayOutcome> {
    let paths = BookshelfPaths::new(root);
    let schema = ActionSchema::embedded()?;
    let actions = read_action_log(&schema, log_path)?;
    apply_and_persist(&paths, &actions)
}

fn apply_and_persist(paths: &BookshelfPaths, actions: &[Action]) -> Result<ReplayOutcome> {
    let config = load_config(&paths.config_path).context("load config.toml")?;
    let state = load_state(&paths.state_path).context("load state.json")?;

    let reducer = AppReducer::new(config.id_strategy);
    let next = apply_actions(reducer, state, actions)?;
    write_state(&paths.state_path, &next, config.output.pretty)?;

    let outcome = ReplayOutcome::new(actions.len(), &next);
    info!(
        applied = outcome.applied,
        authors = outcome.authors,
        books = outcome.books,
        "state updated"
    );
    Ok(outcome)
}
