//! # AddressBar Component
//!
//! The shell's location bar. While browsing it shows the current location;
//! while editing it holds a single-line buffer the user types a fragment
//! into. Enter hands the buffer to the parent, which writes it to the
//! location the same way a user editing the browser's hash would.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `current_location`, `editing`
//! and `label` are props set by the parent every frame. The same bar doubles
//! as the search prompt, where the buffer holds a plain search term.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the AddressBar
#[derive(Debug, Clone, PartialEq)]
pub enum AddressEvent {
    /// User pressed Enter with this address
    Submit(String),
    /// User abandoned the edit (Esc)
    Cancel,
}

pub struct AddressBar {
    /// Edit buffer (Internal State)
    pub buffer: String,
    /// Cursor as byte offset into `buffer`
    cursor: usize,
    /// Location shown while not editing (Prop)
    pub current_location: String,
    /// Whether the bar has focus (Prop)
    pub editing: bool,
    /// Title shown while editing (Prop)
    pub label: &'static str,
}

pub const ADDRESS_LABEL: &str = "Address";
pub const SEARCH_LABEL: &str = "Search";

impl AddressBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            current_location: String::new(),
            editing: false,
            label: ADDRESS_LABEL,
        }
    }

    /// Start editing with `initial` in the buffer and the cursor at its end.
    pub fn begin_edit(&mut self, initial: &str) {
        self.buffer = initial.to_string();
        self.cursor = self.buffer.len();
        self.editing = true;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_str(&mut self, text: &str) {
        // Addresses are one line.
        let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.buffer.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    fn finish(&mut self) -> String {
        self.editing = false;
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }
}

impl Default for AddressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for AddressBar {
    type Event = AddressEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AddressEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut encoded = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut encoded));
                None
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                None
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let start = self.prev_boundary();
                    self.buffer.replace_range(start..self.cursor, "");
                    self.cursor = start;
                }
                None
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let end = self.next_boundary();
                    self.buffer.replace_range(self.cursor..end, "");
                }
                None
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(AddressEvent::Submit(self.finish())),
            TuiEvent::Escape => {
                self.finish();
                Some(AddressEvent::Cancel)
            }
            _ => None,
        }
    }
}

impl Component for AddressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (text, style, title) = if self.editing {
            (
                self.buffer.as_str(),
                Style::default(),
                format!(" {} (Enter go, Esc cancel) ", self.label),
            )
        } else {
            (
                self.current_location.as_str(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                " Address (: to edit, s to search) ".to_string(),
            )
        };

        let paragraph = Paragraph::new(text)
            .style(style)
            .block(Block::bordered().title(title));
        frame.render_widget(paragraph, area);

        if self.editing {
            let column = self.buffer[..self.cursor].width() as u16;
            let max_column = area.width.saturating_sub(2);
            frame.set_cursor_position(Position::new(
                area.x + 1 + column.min(max_column.saturating_sub(1)),
                area.y + 1,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_text(bar: &mut AddressBar, text: &str) {
        for c in text.chars() {
            bar.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_and_submit() {
        let mut bar = AddressBar::new();
        bar.begin_edit("#");
        type_text(&mut bar, "cart");
        assert_eq!(
            bar.handle_event(&TuiEvent::Submit),
            Some(AddressEvent::Submit("#cart".to_string()))
        );
        assert!(!bar.editing);
        assert!(bar.buffer.is_empty());
    }

    #[test]
    fn test_escape_cancels_and_clears() {
        let mut bar = AddressBar::new();
        bar.begin_edit("#search?q=");
        assert_eq!(bar.handle_event(&TuiEvent::Escape), Some(AddressEvent::Cancel));
        assert!(bar.buffer.is_empty());
    }

    #[test]
    fn test_cursor_editing_respects_char_boundaries() {
        let mut bar = AddressBar::new();
        bar.begin_edit("#search?q=é");
        bar.handle_event(&TuiEvent::CursorLeft);
        bar.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(bar.buffer, "#search?q=xé");
        bar.handle_event(&TuiEvent::End);
        bar.handle_event(&TuiEvent::Backspace);
        assert_eq!(bar.buffer, "#search?q=x");
        bar.handle_event(&TuiEvent::Home);
        bar.handle_event(&TuiEvent::Delete);
        assert_eq!(bar.buffer, "search?q=x");
        assert_eq!(bar.cursor(), 0);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut bar = AddressBar::new();
        bar.begin_edit("");
        bar.handle_event(&TuiEvent::Paste("#products\n?category=NEET".to_string()));
        assert_eq!(bar.buffer, "#products?category=NEET");
    }

    #[test]
    fn test_renders_current_location_when_idle() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = AddressBar::new();
        bar.current_location = "#products/42".to_string();

        terminal
            .draw(|f| {
                let area = f.area();
                bar.render(f, area);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("#products/42"));
        assert!(text.contains("Address"));
    }

    #[test]
    fn test_search_label_while_editing() {
        let backend = TestBackend::new(50, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = AddressBar::new();
        bar.begin_edit("botany");
        bar.label = SEARCH_LABEL;

        terminal
            .draw(|f| {
                let area = f.area();
                bar.render(f, area);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Search (Enter go"));
        assert!(text.contains("botany"));
    }
}
