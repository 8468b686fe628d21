//! # TUI Adapter
//!
//! The ratatui-specific layer. Acts as the "browser" around the routing
//! core: it owns the terminal, renders the resolved view, and translates
//! keys into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Each turn:
//!
//! 1. Draw if something changed (an event arrived or the store notified).
//! 2. Wait up to 500ms for an event, then drain all pending events.
//! 3. Deliver queued location changes (back/forward, typed addresses) to
//!    the store, the way a browser fires `hashchange` after the current
//!    handler returns.
//!
//! ## Input Modes
//!
//! - **Browse**: single keys jump to destinations through the facade.
//! - **Address**: keys edit the address bar; Enter writes the location.
//! - **Search**: keys edit a plain search term; Enter goes through the
//!   facade, so the term is encoded like any other parameter.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, deliver_location_changes, update};
use crate::core::config::ResolvedConfig;
use crate::core::location::Location;
use crate::core::route::{Destination, ProductsQuery, SearchQuery};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{AddressBar, AddressEvent, HistoryEvent, HistoryPanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key navigation.
    Browse,
    /// Editing the address bar.
    Address,
    /// Typing a search term.
    Search,
}

/// TUI-specific presentation state (not part of core navigation state)
pub struct TuiState {
    pub address_bar: AddressBar,
    pub input_mode: InputMode,
    // History overlay (None = hidden)
    pub history_panel: Option<HistoryPanelState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            address_bar: AddressBar::new(),
            input_mode: InputMode::Browse,
            history_panel: None,
        }
    }

    fn begin_edit(&mut self, mode: InputMode, initial: &str) {
        self.input_mode = mode;
        self.address_bar.begin_edit(initial);
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock // Non-blinking: avoids blink timer reset from redraws
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

/// Map a browse-mode key to the action it triggers.
pub fn browse_action(c: char) -> Option<Action> {
    let destination = match c {
        'h' => Destination::Home,
        'p' => Destination::Products(ProductsQuery::default()),
        'g' => Destination::Categories,
        'c' => Destination::Cart,
        'k' => Destination::Checkout,
        'a' => Destination::Account,
        'w' => Destination::Wishlist,
        'o' => Destination::OrderTracking,
        'i' => Destination::About,
        't' => Destination::Contact,
        '1'..='9' => Destination::ProductDetail { id: c.to_string() },
        'b' => return Some(Action::Back),
        'f' => return Some(Action::Forward),
        'q' => return Some(Action::Quit),
        _ => return None,
    };
    Some(Action::Navigate(destination))
}

/// A blank term opens the search page without a query.
fn search_destination(text: &str) -> Destination {
    let term = text.trim();
    if term.is_empty() {
        Destination::Search(SearchQuery::default())
    } else {
        Destination::Search(SearchQuery::term(term))
    }
}

/// Route one terminal event. Returns the effect of any action it produced.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }

    // When the history overlay is open, route all events to it
    if let Some(ref mut panel) = tui.history_panel {
        if let Some(history_event) = panel.handle_event(&event) {
            tui.history_panel = None;
            if let HistoryEvent::Jump(index) = history_event {
                return update(app, Action::JumpToHistory(index));
            }
        }
        return Effect::None;
    }

    match tui.input_mode {
        InputMode::Address | InputMode::Search => {
            let mode = tui.input_mode;
            if let Some(address_event) = tui.address_bar.handle_event(&event) {
                tui.input_mode = InputMode::Browse;
                if let AddressEvent::Submit(text) = address_event {
                    let action = match mode {
                        InputMode::Search => Action::Navigate(search_destination(&text)),
                        _ => Action::EnterLocation(text),
                    };
                    return update(app, action);
                }
            }
            Effect::None
        }
        InputMode::Browse => match event {
            TuiEvent::OpenHistory => {
                let history = app.store.location();
                tui.history_panel = Some(HistoryPanelState::new(
                    history.entries().len(),
                    history.cursor(),
                ));
                Effect::None
            }
            TuiEvent::CursorLeft | TuiEvent::HistoryBack => update(app, Action::Back),
            TuiEvent::CursorRight | TuiEvent::HistoryForward => update(app, Action::Forward),
            TuiEvent::InputChar(':') | TuiEvent::InputChar('/') => {
                let current = app.store.location().fragment();
                tui.begin_edit(InputMode::Address, &current);
                Effect::None
            }
            TuiEvent::InputChar('s') => {
                let term = match app.store.current().destination() {
                    Some(Destination::Search(SearchQuery { q: Some(q) })) => q,
                    _ => String::new(),
                };
                tui.begin_edit(InputMode::Search, &term);
                Effect::None
            }
            TuiEvent::InputChar(c) => match browse_action(c) {
                Some(action) => update(app, action),
                None => Effect::None,
            },
            _ => Effect::None,
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame
    let mut seen_changes = app.route_changes();

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        let delivered = deliver_location_changes(&mut app);
        if delivered > 0 {
            debug!("Delivered {} location change(s)", delivered);
        }
        if app.route_changes() != seen_changes {
            seen_changes = app.route_changes();
            needs_redraw = true;
        }
    }

    info!("Storefront shell exiting at {}", app.store.href());
    ratatui::restore();
    Ok(())
}
