//! Single-screen layout: title bar on top, the note card centered in the
//! remaining space with the counter label right below it. The screen
//! background, card background, and counter color all come from the
//! palette currently on screen (mid-fade values included).

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CounterLabel, TitleBar};

/// Widest the note card is allowed to get; on narrower terminals it
/// shrinks with the frame.
const MAX_CARD_WIDTH: u16 = 64;

pub(crate) fn rgb_color(rgb: crate::core::palette::Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let colors = tui.fade.current();

    // Screen background first; everything else paints over it.
    frame.render_widget(
        Block::new().style(Style::default().bg(rgb_color(colors.screen))),
        frame.area(),
    );

    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let mut title_bar = TitleBar::new(app.status_message.clone(), colors.counter, colors.screen);
    title_bar.render(frame, title_area);

    // Center the card horizontally, then stack card + counter vertically
    // in the middle of the main area.
    let card_width = main_area.width.clamp(8, MAX_CARD_WIDTH);
    let [card_column] = Layout::horizontal([Length(card_width)])
        .flex(Flex::Center)
        .areas(main_area);

    let card_height = tui.note_field.calculate_height(card_width);
    let [card_area, counter_area] = Layout::vertical([Length(card_height), Length(1)])
        .flex(Flex::Center)
        .areas(card_column);

    tui.note_field.colors = colors;
    tui.note_field.render(frame, card_area);

    let mut counter = CounterLabel::new(app.counter_text(), colors.counter, colors.screen);
    counter.render(frame, counter_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn rendered_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn test_tui(app: &App) -> TuiState {
        TuiState::new(app, "Write something...".to_string(), Duration::ZERO)
    }

    #[test]
    fn test_draw_ui_fresh_screen() {
        let app = App::new();
        let mut tui = test_tui(&app);
        let text = rendered_text(&app, &mut tui);
        assert!(text.contains("200 characters left"));
        assert!(text.contains("Write something..."));
        assert!(text.contains("jot"));
    }

    #[test]
    fn test_draw_ui_paints_screen_background() {
        let app = App::new();
        let mut tui = test_tui(&app);

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        // Full budget: screen is 0x1F1F21.
        let corner = &terminal.backend().buffer()[(0, 23)];
        assert_eq!(corner.style().bg, Some(Color::Rgb(0x1F, 0x1F, 0x21)));
    }

    #[test]
    fn test_draw_ui_with_text_hides_placeholder() {
        let mut app = App::new();
        app.buffer = "hello".to_string();
        app.remaining = 195;
        app.placeholder_visible = false;
        let mut tui = test_tui(&app);
        tui.note_field.sync_buffer(&app.buffer);

        let text = rendered_text(&app, &mut tui);
        assert!(text.contains("hello"));
        assert!(!text.contains("Write something..."));
        assert!(text.contains("195 characters left"));
    }
}
