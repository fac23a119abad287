//! # TitleBar Component
//!
//! Top status line: app name, transient status messages (the rejection
//! notices), and the key hints. Stateless — everything arrives as props,
//! so parents decide what to show and this file only decides how.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::core::palette::Rgb;
use crate::tui::component::Component;
use crate::tui::ui::rgb_color;

const HINTS: &str = "Tab: focus · Ctrl+L: clear · Ctrl+C: quit";

/// Top status bar.
///
/// # Props
///
/// - `status_message`: transient notice (e.g. "Character limit reached")
/// - `fg` / `bg`: the palette's counter and screen colors, so the bar
///   stays readable through every band
pub struct TitleBar {
    pub status_message: String,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl TitleBar {
    pub fn new(status_message: String, fg: Rgb, bg: Rgb) -> Self {
        Self { status_message, fg, bg }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = if self.status_message.is_empty() {
            format!(" jot · {HINTS}")
        } else {
            format!(" jot · {} · {HINTS}", self.status_message)
        };

        let span = Span::styled(
            text,
            Style::default()
                .fg(rgb_color(self.fg))
                .bg(rgb_color(self.bg))
                .add_modifier(Modifier::DIM),
        );
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| title_bar.render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_without_status() {
        let mut bar = TitleBar::new(
            String::new(),
            Rgb::from_u32(0x1F1F21),
            Rgb::from_u32(0xFFEBEE),
        );
        let text = rendered_text(&mut bar);
        assert!(text.contains("jot"));
        assert!(text.contains("Ctrl+C: quit"));
    }

    #[test]
    fn test_title_bar_with_status() {
        let mut bar = TitleBar::new(
            "Character limit reached".to_string(),
            Rgb::from_u32(0xFFFFFF),
            Rgb::from_u32(0x1F1F21),
        );
        let text = rendered_text(&mut bar);
        assert!(text.contains("Character limit reached"));
    }
}
