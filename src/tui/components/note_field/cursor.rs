//! Cursor position tracking for the note field.
//!
//! `CursorState` owns the caret as a *character* offset so it lines up with
//! the char-indexed `EditSpan`s the core expects. All navigation methods
//! accept `buffer: &str` explicitly — the text data is owned by the core
//! `App`, keeping the dependency visible.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use super::{BORDER_OFFSET, inner_width, wrap_options};

pub(super) struct CursorState {
    /// Caret position as a character offset in `0..=buffer.chars().count()`.
    pub pos: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self { pos: 0 }
    }

    /// Reset to the start (used after Ctrl+L clears the buffer).
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Keep the caret inside the buffer after external mutation.
    pub fn clamp(&mut self, buffer: &str) {
        self.pos = self.pos.min(buffer.chars().count());
    }

    pub fn move_left(&mut self) -> bool {
        if self.pos > 0 {
            self.pos -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_right(&mut self, buffer: &str) -> bool {
        if self.pos < buffer.chars().count() {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Terminal cell for the caret, given the card's area. Walks the
    /// wrapped lines the same way the render path does so the visible
    /// caret always sits on the character it will edit.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + BORDER_OFFSET, area.y + 1);
        }

        let lines = textwrap::wrap(buffer, wrap_options(width));
        let mut consumed = 0usize;
        let mut row = 0usize;
        let mut column_chars = 0usize;

        for (idx, line) in lines.iter().enumerate() {
            let line_chars = line.chars().count();
            if consumed + line_chars >= self.pos {
                row = idx;
                column_chars = self.pos - consumed;
                break;
            }
            consumed += line_chars;
            // textwrap eats the whitespace it broke on; skip it too.
            if buffer.chars().nth(consumed).is_some_and(|c| c == ' ' || c == '\n') {
                consumed += 1;
            }
            row = idx + 1;
        }

        let column_width = lines
            .get(row)
            .map(|line| {
                let prefix: String = line.chars().take(column_chars).collect();
                prefix.width() as u16
            })
            .unwrap_or(0);

        let x = (area.x + BORDER_OFFSET + column_width).min(area.x + area.width.saturating_sub(1));
        let y = (area.y + 1 + row as u16).min(area.y + area.height.saturating_sub(2).max(1));
        (x, y)
    }
}
