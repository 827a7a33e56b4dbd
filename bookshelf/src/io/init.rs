//! Initialization helpers for `.bookshelf/` scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::info;

use super::action_log::ACTION_SCHEMA;
use super::config::{BookshelfConfig, write_config};
use super::state_store::write_state;
use crate::core::app::AppState;

/// All canonical paths within `.bookshelf/` for a project root.
///
/// `schema_path` is a reference copy for users; validation uses the
/// compiled-in schema.
#[derive(Debug, Clone)]
pub struct BookshelfPaths {
    pub dir: PathBuf,
    pub config_path: PathBuf,
    pub state_path: PathBuf,
    pub schema_path: PathBuf,
}

impl BookshelfPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root: PathBuf = root.into();
        let dir = root.join(".bookshelf");
        Self {
            dir: dir.clone(),
            config_path: dir.join("config.toml"),
            state_path: dir.join("state.json"),
            schema_path: dir.join("schema.json"),
        }
    }
}

/// Options for `init_bookshelf`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing bookshelf-owned files.
    pub force: bool,
}

/// Create `.bookshelf/` scaffolding in `root` with an empty state.
///
/// Fails if `.bookshelf/` already exists unless `options.force` is set.
pub fn init_bookshelf(root: &Path, options: &InitOptions) -> Result<BookshelfPaths> {
    let paths = BookshelfPaths::new(root);
    if paths.dir.exists() && !paths.dir.is_dir() {
        return Err(anyhow!(
            "bookshelf init: .bookshelf exists but is not a directory"
        ));
    }
    if paths.dir.exists() && !options.force {
        return Err(anyhow!(
            "bookshelf init: .bookshelf already exists (use --force to overwrite)"
        ));
    }

    fs::create_dir_all(&paths.dir)
        .with_context(|| format!("create directory {}", paths.dir.display()))?;

    let config = BookshelfConfig::default();
    write_config(&paths.config_path, &config)?;
    write_state(&paths.state_path, &AppState::default(), config.output.pretty)?;
    fs::write(&paths.schema_path, ACTION_SCHEMA)
        .with_context(|| format!("write file {}", paths.schema_path.display()))?;

    info!(dir = %paths.dir.display(), "initialized bookshelf");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::load_config;
    use crate::io::state_store::load_state;

    /// Verifies init creates config, empty state, and schema.
    #[test]
    fn init_creates_expected_layout() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_bookshelf(temp.path(), &InitOptions { force: false }).expect("init");

        assert!(paths.dir.is_dir());
        assert!(paths.config_path.is_file());
        assert!(paths.state_path.is_file());
        assert!(paths.schema_path.is_file());

        assert_eq!(
            load_config(&paths.config_path).expect("config"),
            BookshelfConfig::default()
        );
        assert_eq!(load_state(&paths.state_path).expect("state"), AppState::default());
    }

    /// Verifies a second init without force refuses to overwrite.
    #[test]
    fn init_without_force_refuses_existing_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_bookshelf(temp.path(), &InitOptions { force: false }).expect("init");
        let err = init_bookshelf(temp.path(), &InitOptions { force: false }).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    /// Verifies force resets the state file to empty.
    #[test]
    fn init_with_force_resets_state() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_bookshelf(temp.path(), &InitOptions { force: false }).expect("init");
        fs::write(
            &paths.state_path,
            r#"{"authors":[{"id":1,"authorName":"a"}],"books":[]}"#,
        )
        .expect("write custom");

        init_bookshelf(temp.path(), &InitOptions { force: true }).expect("re-init");
        assert_eq!(load_state(&paths.state_path).expect("state"), AppState::default());
    }
}
