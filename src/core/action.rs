//! # Actions
//!
//! Everything that can happen in jot becomes an `Action`.
//! User types a character? That's `Action::Edit` with a one-character
//! replacement. Presses Enter? The same `Action::Edit`, with `"\n"` as the
//! replacement — which the decision function rejects.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the caller what to do next.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state.

use log::debug;

use crate::core::editor::{EditSpan, apply_edit, should_change_text};
use crate::core::palette::{CHARACTER_LIMIT, palette_for};
use crate::core::state::App;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Replace `span` of the buffer with `replacement`. Subject to the
    /// line-break and character-limit rules.
    Edit {
        span: EditSpan,
        replacement: String,
    },
    /// Empty the buffer and reset the counter.
    Clear,
    Quit,
}

/// What the event loop must do after an `update()`.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The buffer changed; the caller should move its cursor and start a
    /// color fade toward the new palette.
    EditApplied,
    /// The edit was rejected; the input field must give up focus.
    FocusResigned,
    Quit,
}

/// Apply an action to the state.
///
/// For edits this is a thin shell around [`should_change_text`]: the
/// decision is computed, the display state (remaining count, palette,
/// placeholder) is refreshed from it *whether or not* the edit is accepted —
/// a rejected over-limit edit still flashes the out-of-range colors, just as
/// the original design updated the label before refusing the keystroke —
/// and the buffer is only touched on acceptance.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Edit { span, replacement } => {
            let decision = should_change_text(&app.buffer, span, &replacement);
            debug!(
                "edit span={span:?} replacement_len={} accept={} remaining={}",
                replacement.chars().count(),
                decision.accept,
                decision.remaining
            );

            app.remaining = decision.remaining;
            app.palette = decision.palette;
            app.placeholder_visible = decision.placeholder_visible;

            if decision.accept {
                app.buffer = apply_edit(&app.buffer, span, &replacement);
                app.status_message.clear();
                Effect::EditApplied
            } else {
                app.status_message = if replacement == "\n" {
                    String::from("Line breaks aren't allowed")
                } else {
                    String::from("Character limit reached")
                };
                Effect::FocusResigned
            }
        }
        Action::Clear => {
            app.buffer.clear();
            app.remaining = CHARACTER_LIMIT;
            app.placeholder_visible = true;
            app.palette = palette_for(CHARACTER_LIMIT);
            app.status_message = String::from("Cleared");
            Effect::EditApplied
        }
        Action::Quit => Effect::Quit,
    }
}
