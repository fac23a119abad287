//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the single
//! screen, and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! never hears about frames, cells, or key codes — it sees edit spans and
//! replacement strings.
//!
//! ## Redraw Strategy
//!
//! The event loop is synchronous and single-threaded; it draws only when
//! something changed:
//!
//! - **Fading** (a color transition in flight): draws every ~80ms so the
//!   blend looks smooth.
//! - **Idle**: sleeps up to 500ms in `poll` and only redraws on events.
//!
//! ## Focus Model
//!
//! The original design resigns the keyboard when an edit is rejected
//! (Enter, or typing past the limit). The terminal analog is an unfocused
//! mode: the caret hides, the card border dims, and keystrokes stop
//! reaching the field until the user refocuses with Tab — or just keeps
//! typing, which refocuses and forwards the keystroke in one step.

mod component;
mod components;
mod event;
mod fade;
mod ui;

use std::io::stdout;
use std::time::Duration;

use log::{debug, info};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{EditRequest, FieldEvent, NoteField};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::fade::PaletteFade;

/// Whether keystrokes are routed to the note field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal editing; the caret is visible.
    Focused,
    /// A rejected edit (or Esc) dropped focus. Tab or typing refocuses.
    Unfocused,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub note_field: NoteField,
    pub fade: PaletteFade,
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new(app: &App, placeholder: String, transition: Duration) -> Self {
        let mut note_field = NoteField::new(placeholder);
        note_field.sync_buffer(&app.buffer);
        Self {
            note_field,
            fade: PaletteFade::new(app.palette, transition),
            // User expects to type immediately
            input_mode: InputMode::Focused,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // SteadyBlock: ratatui's set_cursor_position resets the terminal's
        // blink timer on every draw, which makes a blinking caret look
        // erratic while a fade is redrawing continuously.
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new(
        &app,
        config.placeholder.clone(),
        Duration::from_millis(config.transition_ms),
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        tui.note_field.focused = tui.input_mode == InputMode::Focused;

        let animating = tui.fade.in_flight();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while fading (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Ctrl+L clears the note in both modes
            if matches!(event, TuiEvent::Clear) {
                if update(&mut app, Action::Clear) == Effect::EditApplied {
                    tui.note_field.sync_buffer(&app.buffer);
                    tui.fade.retarget(app.palette);
                }
                continue;
            }

            // Esc: unfocus first, quit when already unfocused
            if matches!(event, TuiEvent::Escape) {
                match tui.input_mode {
                    InputMode::Focused => {
                        debug!("Esc: dropping field focus");
                        tui.input_mode = InputMode::Unfocused;
                    }
                    InputMode::Unfocused => {
                        if update(&mut app, Action::Quit) == Effect::Quit {
                            should_quit = true;
                        }
                    }
                }
                continue;
            }

            if matches!(event, TuiEvent::Focus) {
                tui.input_mode = InputMode::Focused;
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Focused => {
                    if let Some(FieldEvent::Edit(request)) = tui.note_field.handle_event(&event) {
                        dispatch_edit(&mut app, &mut tui, request);
                    }
                }
                InputMode::Unfocused => match event {
                    // Typing refocuses and forwards the keystroke, like
                    // tapping back into the field mid-sentence.
                    TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                        tui.input_mode = InputMode::Focused;
                        if let Some(FieldEvent::Edit(request)) =
                            tui.note_field.handle_event(&event)
                        {
                            dispatch_edit(&mut app, &mut tui, request);
                        }
                    }
                    TuiEvent::Enter => {
                        tui.input_mode = InputMode::Focused;
                    }
                    _ => {}
                },
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Run one edit request through the reducer and react to the effect:
/// accepted edits move the caret and start a color fade; rejections drop
/// focus (and still fade, so an over-limit attempt flashes the fallback
/// colors).
fn dispatch_edit(app: &mut App, tui: &mut TuiState, request: EditRequest) {
    let action = Action::Edit {
        span: request.span,
        replacement: request.replacement.clone(),
    };
    match update(app, action) {
        Effect::EditApplied => {
            tui.note_field.edit_applied(&request, &app.buffer);
            tui.fade.retarget(app.palette);
        }
        Effect::FocusResigned => {
            debug!("Edit rejected: resigning field focus");
            tui.input_mode = InputMode::Unfocused;
            tui.fade.retarget(app.palette);
        }
        Effect::None | Effect::Quit => {}
    }
}
