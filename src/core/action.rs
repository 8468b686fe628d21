//! # Actions
//!
//! Everything that can happen in the storefront shell becomes an `Action`.
//! User presses `c`? That's `Action::Navigate(Destination::Cart)`.
//! History reports a change? That's `Action::LocationChanged`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. The only I/O-like thing it touches is the in-memory
//! location, which is part of the state.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Back/forward and typed addresses only move the location. The location
//! then queues a change, and [`deliver_location_changes`] turns each one
//! into `Action::LocationChanged`, the same path a browser's `hashchange`
//! takes.

use log::debug;

use crate::core::location::Location;
use crate::core::route::Destination;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Facade navigation to a typed destination.
    Navigate(Destination),
    /// An address typed by the user, written straight to the location.
    EnterLocation(String),
    /// The location changed outside the store.
    LocationChanged,
    Back,
    Forward,
    /// Jump to a history entry by index.
    JumpToHistory(usize),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::Navigate(destination) => {
            app.store.navigator().go_to(destination);
            app.status_message = format!("Opened {}", app.store.href());
        }
        Action::EnterLocation(address) => {
            let address = address.trim();
            app.store.location_mut().set_fragment(address);
            app.status_message = format!("Loading {}", app.store.location().fragment());
        }
        Action::LocationChanged => {
            if app.store.on_external_change() {
                app.status_message = format!("Now at {}", app.store.href());
            }
        }
        Action::Back => {
            if !app.store.location_mut().back() {
                app.status_message = String::from("No earlier page");
            }
        }
        Action::Forward => {
            if !app.store.location_mut().forward() {
                app.status_message = String::from("No later page");
            }
        }
        Action::JumpToHistory(index) => {
            app.store.location_mut().go(index);
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

/// Feed every pending location change back through `update`. Returns how
/// many were delivered.
pub fn deliver_location_changes(app: &mut App) -> usize {
    let mut delivered = 0;
    while app.store.location_mut().take_change() {
        update(app, Action::LocationChanged);
        delivered += 1;
    }
    delivered
}
