//! # StatusBar Component
//!
//! Top line of the shell: the screen title, the status message and which
//! history directions are available.
//!
//! Purely presentational. Every field is a prop from the parent:
//!
//! - `title`: heading of the resolved view
//! - `status_message`: last action result (`Opened #cart`, `No earlier page`)
//! - `can_go_back` / `can_go_forward`: history arrows
//!
//! Format: `◀ ▶ Storefront · Cart | Opened #cart`. An unavailable arrow is
//! drawn as a space so the title does not shift.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct StatusBar {
    pub title: String,
    pub status_message: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl StatusBar {
    pub fn new(
        title: String,
        status_message: String,
        can_go_back: bool,
        can_go_forward: bool,
    ) -> Self {
        Self {
            title,
            status_message,
            can_go_back,
            can_go_forward,
        }
    }

    pub fn text(&self) -> String {
        let back = if self.can_go_back { '◀' } else { ' ' };
        let forward = if self.can_go_forward { '▶' } else { ' ' };
        if self.status_message.is_empty() {
            format!("{} {} Storefront · {}", back, forward, self.title)
        } else {
            format!(
                "{} {} Storefront · {} | {}",
                back, forward, self.title, self.status_message
            )
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
