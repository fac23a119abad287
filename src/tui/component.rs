use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may hold presentation
/// state of their own, and render into a `Frame` within a given `Rect`.
/// The note field is the only stateful one; the title bar and counter are
/// purely props-driven.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so components can update internal presentation
    /// state (cached widths, scroll offsets) during the render pass, in
    /// line with Ratatui's `StatefulWidget` pattern.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
///
/// Handlers never mutate core state directly: they translate low-level
/// `TuiEvent`s into a high-level event (for the note field, an edit
/// request) that the event loop turns into a core `Action`.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
