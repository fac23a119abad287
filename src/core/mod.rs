//! # Core Application Logic
//!
//! This module contains jot's business logic. It knows nothing about any
//! specific UI technology — no ratatui, no crossterm, no colors beyond
//! plain RGB values.
//!
//! ```text
//! Action (pending edit)
//!    │
//!    ▼
//! update() ── should_change_text() ── palette_for()
//!    │
//!    ▼
//! App (buffer, remaining, placeholder, palette)
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`editor`]: The pure `should_change_text()` decision function
//! - [`palette`]: The remaining-count → color-triple threshold table
//! - [`config`]: TOML configuration loading and resolution

pub mod action;
pub mod config;
pub mod editor;
pub mod palette;
pub mod state;
