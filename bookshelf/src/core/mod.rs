//! Deterministic, pure reducer logic.
//!
//! Core modules must be free of I/O side effects. They operate on immutable
//! in-memory values and return deterministic outputs suitable for tests
//! (the only exception is the opt-in UUID id strategy).

pub mod app;
pub mod authors;
pub mod books;
pub mod ids;
pub mod monolith;
pub mod reducer;
pub mod types;
pub mod validate;
