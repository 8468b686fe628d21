//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::location::MemoryHistory;
use crate::core::resolver::UnknownRoutePolicy;
use crate::core::route::RouteState;
use crate::core::state::App;
use crate::core::store::NavigationStore;

/// Creates a store over a fresh history starting at `fragment`.
pub fn test_store(fragment: &str) -> NavigationStore<MemoryHistory> {
    NavigationStore::new(MemoryHistory::new(fragment))
}

/// Creates a test App at `fragment` with the default unknown-route policy.
pub fn test_app(fragment: &str) -> App {
    App::new(MemoryHistory::new(fragment), UnknownRoutePolicy::default())
}

/// An observer that records every route it is shown.
pub fn recording_observer() -> (Rc<RefCell<Vec<RouteState>>>, impl FnMut(&RouteState) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |route: &RouteState| sink.borrow_mut().push(route.clone()))
}
