//! # NoteField Component
//!
//! The single text-entry card. It renders the note (or the placeholder
//! label when the note is empty) and translates key events into edit
//! requests for the core.
//!
//! ## State Management
//!
//! The text buffer is owned by `core::state::App`, not by this component —
//! every mutation must pass through the decision function. What lives here
//! is presentation state only: the caret, plus props mirrored from the app
//! each frame (buffer text, colors, focus).

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::editor::EditSpan;
use crate::core::palette::{CHARACTER_LIMIT, Palette, palette_for};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::ui::rgb_color;

use cursor::CursorState;

/// Border (2) + padding (2) consumed horizontally by the bordered card
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
const VERTICAL_OVERHEAD: u16 = 2;
/// The card never grows past this many content lines
const MAX_VISIBLE_LINES: u16 = 8;
/// Offset from the card edge to the first content cell (border + padding)
pub(super) const BORDER_OFFSET: u16 = 2;

/// Build textwrap options configured for the card's inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width after subtracting border/padding overhead.
pub(super) fn inner_width(card_width: u16) -> u16 {
    card_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// A pending edit, ready to become `Action::Edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub span: EditSpan,
    pub replacement: String,
}

/// High-level events emitted by the NoteField
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The user attempted an edit; the core decides whether it applies.
    Edit(EditRequest),
}

/// The note card.
///
/// # Props
///
/// - `buffer`: mirror of the core text (synced by the event loop)
/// - `placeholder`: label shown while the buffer is empty
/// - `colors`: the palette currently on screen (mid-fade values included)
/// - `focused`: whether keystrokes are going to this field
///
/// # State
///
/// - `cursor`: caret position (see `CursorState`)
pub struct NoteField {
    pub buffer: String,
    pub placeholder: String,
    pub colors: Palette,
    pub focused: bool,
    cursor: CursorState,
}

impl NoteField {
    pub fn new(placeholder: String) -> Self {
        Self {
            buffer: String::new(),
            placeholder,
            colors: palette_for(CHARACTER_LIMIT),
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// Card height for the current content, clamped to viewport limits.
    pub fn calculate_height(&self, card_width: u16) -> u16 {
        let width = inner_width(card_width);
        if width == 0 || self.buffer.is_empty() {
            return 1 + VERTICAL_OVERHEAD;
        }
        let lines = textwrap::wrap(&self.buffer, wrap_options(width)).len() as u16;
        lines.max(1).min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Called by the event loop after the core accepted an edit: mirror the
    /// new buffer and put the caret at the end of the inserted text.
    pub fn edit_applied(&mut self, request: &EditRequest, buffer: &str) {
        self.buffer = buffer.to_string();
        self.cursor.pos = request.span.start + request.replacement.chars().count();
        self.cursor.clamp(&self.buffer);
    }

    /// Mirror the buffer without an edit (startup, Ctrl+L clear).
    pub fn sync_buffer(&mut self, buffer: &str) {
        self.buffer = buffer.to_string();
        self.cursor.reset();
        self.cursor.clamp(&self.buffer);
    }

    fn wrapped_text(&self, card_width: u16) -> String {
        let width = inner_width(card_width);
        if width == 0 {
            return String::new();
        }
        textwrap::wrap(&self.buffer, wrap_options(width)).join("\n")
    }
}

impl Component for NoteField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let field_bg = rgb_color(self.colors.field);
        let text_fg = rgb_color(self.colors.counter);

        let border_style = if self.focused {
            Style::default().fg(text_fg).bg(field_bg)
        } else {
            Style::default()
                .fg(text_fg)
                .bg(field_bg)
                .add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(field_bg));

        let paragraph = if self.buffer.is_empty() {
            // The placeholder effect: a dim label standing in for the text,
            // hidden the moment the buffer is non-empty.
            Paragraph::new(self.placeholder.as_str())
                .block(block)
                .style(
                    Style::default()
                        .fg(text_fg)
                        .bg(field_bg)
                        .add_modifier(Modifier::DIM | Modifier::ITALIC),
                )
        } else {
            Paragraph::new(self.wrapped_text(area.width))
                .block(block)
                .style(Style::default().fg(text_fg).bg(field_bg))
        };

        frame.render_widget(paragraph, area);

        if self.focused {
            let (x, y) = self.cursor.screen_pos(&self.buffer, area);
            frame.set_cursor_position((x, y));
        }
    }
}

impl EventHandler for NoteField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let request = |span, replacement: &str| {
            Some(FieldEvent::Edit(EditRequest {
                span,
                replacement: replacement.to_string(),
            }))
        };

        match event {
            TuiEvent::InputChar(c) => {
                request(EditSpan::caret(self.cursor.pos), &c.to_string())
            }
            // Enter is an attempted line break — the core always rejects it
            // and the rejection is what drops focus.
            TuiEvent::Enter => request(EditSpan::caret(self.cursor.pos), "\n"),
            TuiEvent::Paste(text) => request(EditSpan::caret(self.cursor.pos), text),
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    request(EditSpan::new(self.cursor.pos - 1, 1), "")
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.chars().count() {
                    request(EditSpan::new(self.cursor.pos, 1), "")
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                self.cursor.move_left();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor.move_right(&self.buffer);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.reset();
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.pos = self.buffer.chars().count();
                None
            }
            _ => None,
        }
    }
}
