//! # CounterLabel Component
//!
//! The live "N characters left" indicator under the note card.
//!
//! Purely presentational: the count text and its colors are props computed
//! by the core (the counter never does its own arithmetic), so this file is
//! just layout. The negative-count clamp to "0 characters left" happens in
//! `App::counter_text`, before the value ever reaches here.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::core::palette::Rgb;
use crate::tui::component::Component;
use crate::tui::ui::rgb_color;

/// Character counter label.
///
/// # Props
///
/// - `text`: the full label, e.g. `"195 characters left"`
/// - `fg`: the palette's counter color
/// - `bg`: the palette's screen color (the label sits on the bare screen)
pub struct CounterLabel {
    pub text: String,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl CounterLabel {
    pub fn new(text: String, fg: Rgb, bg: Rgb) -> Self {
        Self { text, fg, bg }
    }
}

impl Component for CounterLabel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label = Paragraph::new(self.text.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(rgb_color(self.fg)).bg(rgb_color(self.bg)));
        frame.render_widget(label, area);
    }
}
