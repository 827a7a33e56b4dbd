//! Book and author tracking built from composed reducers.
//!
//! State is split into slices (`authors`, `books`), each owned by a small pure
//! reducer. [`combine_reducers!`] merges them into one reducer over the whole
//! state, and every dispatched action reaches every slice. That is how a single
//! `ADD_BOOK` can update both books and authors.
//!
//! - **[`core`]**: Pure, deterministic logic (slice reducers, composition,
//!   validation). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config, state file, action logs).
//!
//! [`store`] holds a caller-owned state and threads it through the reducer;
//! [`replay`] coordinates it with I/O for the CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod model;
pub mod replay;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
