//! # History Panel Component
//!
//! Overlay listing every entry in the shell's history, newest at the
//! bottom, with the current entry marked. Opened with Ctrl+O, dismissed
//! with Esc. Enter jumps to the selected entry.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HistoryPanelState` lives in `TuiState`
//! - `HistoryPanel` is created each frame with borrowed state and entries

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::location::HistoryEntry;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the history overlay.
pub struct HistoryPanelState {
    pub selected: usize,
    pub entry_count: usize,
    pub list_state: ListState,
}

impl HistoryPanelState {
    /// Opens with the current entry selected.
    pub fn new(entry_count: usize, current: usize) -> Self {
        let selected = current.min(entry_count.saturating_sub(1));
        let mut list_state = ListState::default();
        if entry_count > 0 {
            list_state.select(Some(selected));
        }
        Self {
            selected,
            entry_count,
            list_state,
        }
    }
}

/// Events emitted by the history overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    Jump(usize),
    Dismiss,
}

impl EventHandler for HistoryPanelState {
    type Event = HistoryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<HistoryEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::OpenHistory => Some(HistoryEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                if self.entry_count > 0 {
                    self.selected = (self.selected + 1).min(self.entry_count - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit if self.entry_count > 0 => Some(HistoryEvent::Jump(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the history overlay.
pub struct HistoryPanel<'a> {
    state: &'a mut HistoryPanelState,
    entries: &'a [HistoryEntry],
    current: usize,
}

impl<'a> HistoryPanel<'a> {
    pub fn new(state: &'a mut HistoryPanelState, entries: &'a [HistoryEntry], current: usize) -> Self {
        Self {
            state,
            entries,
            current,
        }
    }
}

impl Component for HistoryPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 60, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" History ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Select  Enter Open  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let marker = if idx == self.current { "● " } else { "  " };
                let time = entry.visited_at.with_timezone(&Local).format("%H:%M:%S");
                let fragment = if entry.fragment.is_empty() {
                    "#"
                } else {
                    entry.fragment.as_str()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{} ", time), Style::default().fg(Color::DarkGray)),
                    Span::raw(fragment.to_string()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
