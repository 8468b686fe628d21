//! # Application State
//!
//! Core state for the storefront shell. Presentation state lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── store: NavigationStore<MemoryHistory>  // route state + history
//! ├── resolver: PageResolver                 // route → view
//! ├── status_message: String                 // status bar text
//! └── route_changes: Rc<Cell<u64>>           // bumped by a store observer
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::info;
use std::cell::Cell;
use std::rc::Rc;

use crate::core::config::ResolvedConfig;
use crate::core::location::MemoryHistory;
use crate::core::resolver::{PageResolver, UnknownRoutePolicy, View};
use crate::core::store::NavigationStore;

pub struct App {
    pub store: NavigationStore<MemoryHistory>,
    pub resolver: PageResolver,
    pub status_message: String,
    route_changes: Rc<Cell<u64>>,
}

impl App {
    pub fn new(history: MemoryHistory, policy: UnknownRoutePolicy) -> Self {
        let mut store = NavigationStore::new(history);
        let route_changes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&route_changes);
        store.subscribe(move |route| {
            counter.set(counter.get() + 1);
            info!("Route changed to {} ({} params)", route.page, route.params.len());
        });

        Self {
            store,
            resolver: PageResolver::new(policy),
            status_message: String::from("Welcome to the storefront!"),
            route_changes,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let history = MemoryHistory::new(&config.start_location).with_limit(config.history_limit);
        Self::new(history, config.unknown_route)
    }

    /// The view for the current route.
    pub fn view(&self) -> View {
        self.resolver.resolve(self.store.current())
    }

    /// How many distinct route changes observers have seen so far.
    pub fn route_changes(&self) -> u64 {
        self.route_changes.get()
    }
}
