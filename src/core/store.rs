//! # Navigation State Store
//!
//! The single holder of the current [`RouteState`]. It sits between a
//! [`Location`] and whoever renders pages.
//!
//! ```text
//!  location change ──► on_external_change() ──┐
//!                                             ├──► apply() ──► observers
//!  navigate(page, params) ──► location write ─┘
//! ```
//!
//! `navigate` writes the location *and* applies the new state right away,
//! so callers see it as soon as the call returns. The location then
//! reports the change a second time through `on_external_change`. That
//! second apply decodes to an equal state and does nothing: observers run
//! once per distinct state, never twice for one navigation.
//!
//! The store is an ordinary value. Construct one per window (or per test)
//! and hand it to whatever composes the UI.

use log::{debug, info};

use crate::core::codec;
use crate::core::facade::Navigator;
use crate::core::location::Location;
use crate::core::page::Page;
use crate::core::route::{Params, RouteState};

/// Handle returned by [`NavigationStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&RouteState)>;

pub struct NavigationStore<L: Location> {
    location: L,
    current: RouteState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<L: Location> NavigationStore<L> {
    /// Creates the store and decodes the location's current fragment.
    pub fn new(location: L) -> Self {
        let mut store = Self {
            location,
            current: RouteState::home(),
            observers: Vec::new(),
            next_subscription: 0,
        };
        store.initialize();
        store
    }

    /// Decode the current location into route state. Leaves the location
    /// untouched and notifies nobody.
    pub fn initialize(&mut self) {
        let fragment = self.location.fragment();
        self.current = codec::from_href(&fragment);
        info!("Navigation initialized at {:?} (page {})", fragment, self.current.page);
    }

    /// The location changed underneath us (back/forward, typed address).
    /// Returns whether the route state changed.
    pub fn on_external_change(&mut self) -> bool {
        let route = codec::from_href(&self.location.fragment());
        self.apply(route)
    }

    /// Navigate to `page` with `params`. For `product-detail` the `id`
    /// param ends up in the path, not the query.
    pub fn navigate(&mut self, page: Page, params: Params) {
        self.navigate_to(RouteState::new(page, params));
    }

    pub fn navigate_to(&mut self, route: RouteState) {
        // Apply the form the location will report back, so the echo matches.
        let route = codec::canonicalize(&route);
        let href = codec::href(&route);
        info!("Navigating to {}", href);
        self.location.set_fragment(&href);
        self.apply(route);
    }

    /// Typed entry points over [`navigate`](Self::navigate).
    pub fn navigator(&mut self) -> Navigator<'_, L> {
        Navigator::new(self)
    }

    pub fn current(&self) -> &RouteState {
        &self.current
    }

    /// The current state as an address-bar location.
    pub fn href(&self) -> String {
        codec::href(&self.current)
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Direct access to the location, e.g. to step through history. Call
    /// [`on_external_change`](Self::on_external_change) afterwards.
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// Register an observer. It runs after every distinct state change,
    /// in subscription order.
    pub fn subscribe(&mut self, observer: impl FnMut(&RouteState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        debug!("Observer {:?} subscribed ({} active)", id, self.observers.len());
        id
    }

    /// Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn apply(&mut self, route: RouteState) -> bool {
        if route == self.current {
            debug!("Route unchanged ({}), skipping notify", route.page);
            return false;
        }
        self.current = route;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.current);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::location::MemoryHistory;
    use crate::test_support::{recording_observer, test_store};

    #[test]
    fn test_new_decodes_initial_location() {
        let store = test_store("#products?category=NEET");
        assert_eq!(store.current().page, Page::Products);
        assert_eq!(store.current().param("category"), Some("NEET"));
        assert_eq!(store.location().pending_changes(), 0);
    }

    #[test]
    fn test_navigate_updates_state_and_location_synchronously() {
        let mut store = test_store("");
        store.navigate(Page::Cart, Params::new());
        assert_eq!(store.current(), &RouteState::page(Page::Cart));
        assert_eq!(store.location().fragment(), "#cart");
        assert_eq!(store.href(), "#cart");
    }

    #[test]
    fn test_navigate_routes_product_id_into_path() {
        let mut store = test_store("");
        let mut params = Params::new();
        params.insert("id".to_string(), "42".to_string());
        store.navigate(Page::ProductDetail, params);
        assert_eq!(store.location().fragment(), "#products/42");
        assert_eq!(store.current().param("id"), Some("42"));
    }

    #[test]
    fn test_duplicate_notification_does_not_renotify() {
        let mut store = test_store("");
        let (log, observer) = recording_observer();
        store.subscribe(observer);

        store.navigate(Page::Wishlist, Params::new());
        assert_eq!(log.borrow().len(), 1);

        // The location's own change event arrives afterwards.
        assert!(store.location_mut().take_change());
        assert!(!store.on_external_change());
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(store.current().page, Page::Wishlist);
    }

    #[test]
    fn test_external_change_is_idempotent() {
        let mut store = test_store("#cart");
        store.location_mut().set_fragment("#search?q=physics");
        assert!(store.on_external_change());
        let first = store.current().clone();
        assert!(!store.on_external_change());
        assert_eq!(store.current(), &first);
    }

    #[test]
    fn test_back_navigation_restores_previous_route() {
        let mut store = test_store("#products?category=NEET");
        store.navigator().go_to_cart();
        assert_eq!(store.location().fragment(), "#cart");

        assert!(store.location_mut().back());
        assert!(store.on_external_change());
        assert_eq!(store.current().page, Page::Products);
        assert_eq!(store.current().param("category"), Some("NEET"));
    }

    #[test]
    fn test_observers_run_in_subscription_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let order = Rc::new(RefCell::new(Vec::new()));
        let mut store = test_store("");
        for name in ["first", "second"] {
            let order = Rc::clone(&order);
            store.subscribe(move |_| order.borrow_mut().push(name));
        }
        store.navigate(Page::About, Params::new());
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_observer_sees_new_state() {
        let mut store = test_store("");
        let (log, observer) = recording_observer();
        store.subscribe(observer);
        store.navigate(Page::Contact, Params::new());
        assert_eq!(log.borrow()[0].page, Page::Contact);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut store = test_store("");
        let (log, observer) = recording_observer();
        let id = store.subscribe(observer);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        assert_eq!(store.observer_count(), 0);

        store.navigate(Page::Account, Params::new());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_initialize_does_not_notify() {
        let mut store = NavigationStore::new(MemoryHistory::new("#cart"));
        let (log, observer) = recording_observer();
        store.subscribe(observer);
        store.initialize();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_navigate_canonicalizes_incomplete_product_route() {
        let mut store = test_store("");
        store.navigate(Page::ProductDetail, Params::new());
        assert_eq!(store.current().page, Page::Unknown("product-detail".to_string()));
        store.location_mut().take_change();
        assert!(!store.on_external_change());
    }
}
