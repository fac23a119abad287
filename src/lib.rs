//! Jot library exports so integration tests can exercise the core.

pub mod core;
pub mod tui;
