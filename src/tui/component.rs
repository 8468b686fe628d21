use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the storefront shell that draws itself.
///
/// Components receive what they show as props (struct fields) and render
/// into a `Rect` of the frame. `render` takes `&mut self` so a component
/// can keep presentation state such as a list selection.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
