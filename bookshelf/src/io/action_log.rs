//! Action parsing for `dispatch` and `replay`.
//!
//! Every action is checked against the action JSON Schema before it is
//! deserialized, so a missing payload is reported with the schema's message
//! rather than a generic serde error.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::{Validator, validator_for};
use serde_json::Value;
use tracing::debug;

use crate::core::types::Action;

/// Action schema bundled into the binary.
pub const ACTION_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/action/v1.schema.json"
));

/// Compiled action schema.
pub struct ActionSchema {
    validator: Validator,
}

impl ActionSchema {
    /// Compile the bundled schema.
    pub fn embedded() -> Result<Self> {
        Self::compile(ACTION_SCHEMA)
    }

    fn compile(raw: &str) -> Result<Self> {
        let schema: Value = serde_json::from_str(raw).context("parse schema json")?;
        let validator =
            validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
        Ok(Self { validator })
    }

    /// Schema violations for `instance`, in the validator's order.
    pub fn violations(&self, instance: &Value) -> Vec<String> {
        self.validator
            .iter_errors(instance)
            .map(|err| err.to_string())
            .collect()
    }
}

/// Parse one action from JSON text.
pub fn parse_action(schema: &ActionSchema, raw: &str) -> Result<Action> {
    let value: Value = serde_json::from_str(raw).context("parse action json")?;
    let violations = schema.violations(&value);
    if !violations.is_empty() {
        return Err(anyhow!(
            "action schema validation failed: {}",
            violations.join("; ")
        ));
    }
    serde_json::from_value(value).context("deserialize action")
}

/// Parse a JSON Lines action log.
///
/// Blank lines and lines starting with `#` are skipped. The first invalid line
/// aborts parsing with its 1-based line number in the error.
pub fn parse_action_log(schema: &ActionSchema, contents: &str) -> Result<Vec<Action>> {
    let mut actions = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let action =
            parse_action(schema, trimmed).with_context(|| format!("line {}", index + 1))?;
        actions.push(action);
    }
    debug!(actions = actions.len(), "parsed action log");
    Ok(actions)
}

/// Read and parse an action log file.
pub fn read_action_log(schema: &ActionSchema, path: &Path) -> Result<Vec<Action>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read action log {}", path.display()))?;
    parse_action_log(schema, &contents).with_context(|| format!("parse {}", path.display()))
}
