//! Bookshelf configuration stored under `.bookshelf/config.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::ids::IdStrategy;

/// Bookshelf configuration (TOML).
///
/// Meant to be edited by humans. Missing fields fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BookshelfConfig {
    /// Id source for authors synthesized from `ADD_BOOK`.
    pub id_strategy: IdStrategy,

    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON written to the state file and by `show`.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `BookshelfConfig::default()`.
pub fn load_config(path: &Path) -> Result<BookshelfConfig> {
    if !path.exists() {
        return Ok(BookshelfConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: BookshelfConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &BookshelfConfig) -> Result<()> {
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    super::write_atomic(path, &buf)
}
