use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
pub enum TuiEvent {
    // Global
    ForceQuit, // Ctrl+C always quits
    Escape,    // Unfocus the field, or quit when already unfocused
    Resize,

    // Editing (routed to the note field)
    InputChar(char),
    Paste(String), // Bracketed paste - may carry newlines
    Backspace,
    Delete,
    Enter, // Becomes an edit with "\n" — always rejected, drops focus
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Shortcuts
    Focus, // Tab refocuses after a rejection dropped focus
    Clear, // Ctrl+L empties the note
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::Clear),
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                    (_, KeyCode::Enter) => Some(TuiEvent::Enter),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Tab) => Some(TuiEvent::Focus),
                    (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                    (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                    (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                    (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                    _ => None,
                }
            }
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately). Used to drain
/// everything pending before the next draw.
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
