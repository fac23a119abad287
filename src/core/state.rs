//! # Application State
//!
//! Core business state for jot. This module contains domain logic only —
//! no TUI-specific types. Presentation state (cursor position, focus mode,
//! in-flight color fades) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── buffer: String               // the note text
//! ├── remaining: i32               // characters left (200 when empty)
//! ├── placeholder_visible: bool    // true iff buffer is empty
//! ├── palette: Palette             // colors for the current count
//! └── status_message: String       // title bar text
//! ```
//!
//! The buffer changes only through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::palette::{CHARACTER_LIMIT, Palette, palette_for};

pub struct App {
    pub buffer: String,
    pub remaining: i32,
    pub placeholder_visible: bool,
    pub palette: Palette,
    pub status_message: String,
}

impl App {
    /// Fresh state for screen load: empty buffer, full budget, placeholder
    /// shown. Nothing survives between runs.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            remaining: CHARACTER_LIMIT,
            placeholder_visible: true,
            palette: palette_for(CHARACTER_LIMIT),
            status_message: String::new(),
        }
    }

    /// The counter label text. Negative counts are clamped at display time;
    /// a negative count only ever comes from a rejected edit.
    pub fn counter_text(&self) -> String {
        format!("{} characters left", self.remaining.max(0))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert!(app.buffer.is_empty());
        assert_eq!(app.remaining, CHARACTER_LIMIT);
        assert!(app.placeholder_visible);
        assert_eq!(app.palette, palette_for(CHARACTER_LIMIT));
    }

    #[test]
    fn test_counter_text_clamps_negative() {
        let mut app = App::new();
        app.remaining = -3;
        assert_eq!(app.counter_text(), "0 characters left");
        app.remaining = 42;
        assert_eq!(app.counter_text(), "42 characters left");
    }
}
