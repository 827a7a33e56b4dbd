//! State load/save helpers with invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

use crate::core::app::AppState;
use crate::core::validate::{duplicate_ids, validate_state};

/// Load and validate state from disk.
pub fn load_state(path: &Path) -> Result<AppState> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read state {}", path.display()))?;
    let state: AppState = serde_json::from_str(&contents)
        .with_context(|| format!("parse state {}", path.display()))?;
    let errors = validate_state(&state);
    if !errors.is_empty() {
        return Err(anyhow!(
            "state invariants failed in {}: {}",
            path.display(),
            errors.join("; ")
        ));
    }
    for note in duplicate_ids(&state) {
        warn!(path = %path.display(), "{}", note);
    }
    debug!(
        path = %path.display(),
        authors = state.authors.len(),
        books = state.books.len(),
        "loaded state"
    );
    Ok(state)
}

/// Render state as JSON with a trailing newline.
pub fn render_state(state: &AppState, pretty: bool) -> Result<String> {
    let mut buf = if pretty {
        serde_json::to_string_pretty(state)
    } else {
        serde_json::to_string(state)
    }
    .context("serialize state json")?;
    buf.push('\n');
    Ok(buf)
}

/// Atomically write state to disk.
pub fn write_state(path: &Path, state: &AppState, pretty: bool) -> Result<()> {
    let buf = render_state(state, pretty)?;
    super::write_atomic(path, &buf)?;
    debug!(path = %path.display(), "wrote state");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::{author, book};

    /// Written state loads back unchanged.
    #[test]
    fn write_then_load_state() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("state.json");
        let state = AppState {
            authors: Arc::from(vec![author(1, "Neal Stephenson")]),
            books: Arc::from(vec![book(1, "Snow Crash", "Neal Stephenson")]),
        };

        write_state(&path, &state, true).expect("write");
        let loaded = load_state(&path).expect("load");
        assert_eq!(loaded, state);
    }

    /// States with blank names are refused on load.
    #[test]
    fn load_rejects_blank_names() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("state.json");
        fs::write(
            &path,
            r#"{"authors":[{"id":1,"authorName":""}],"books":[]}"#,
        )
        .expect("write");

        let err = load_state(&path).unwrap_err();
        assert!(err.to_string().contains("authors[0].authorName must not be blank"));
    }

    /// Duplicate ids are reachable by dispatch and still load.
    #[test]
    fn load_accepts_duplicate_book_ids() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("state.json");
        let state = AppState {
            authors: Arc::from(vec![author(1, "Neal Stephenson")]),
            books: Arc::from(vec![
                book(1, "Snow Crash", "Neal Stephenson"),
                book(1, "Snow Crash", "Neal Stephenson"),
            ]),
        };
        write_state(&path, &state, false).expect("write");
        assert_eq!(load_state(&path).expect("load"), state);
    }

    /// Compact rendering keeps the document on one line.
    #[test]
    fn render_compact_is_single_line() {
        let rendered = render_state(&AppState::default(), false).expect("render");
        assert_eq!(rendered, "{\"authors\":[],\"books\":[]}\n");
    }
}
