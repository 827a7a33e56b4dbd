//! Stable exit codes for bookshelf CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: invalid action, invalid state file, bad config, or I/O error.
pub const INVALID: i32 = 1;
