//! # Navigation Facade
//!
//! One method per destination so calling code never spells out page
//! identifiers or parameter keys. Every method builds a [`Destination`]
//! and hands it to the store; nothing here validates ids or talks to the
//! catalog.
//!
//! ```rust,ignore
//! store.navigator().go_to_products(ProductsQuery::category("NEET"));
//! store.navigator().go_to_product_detail("42"); // → #products/42
//! ```

use crate::core::location::Location;
use crate::core::route::{Destination, ProductsQuery, SearchQuery};
use crate::core::store::NavigationStore;

pub struct Navigator<'a, L: Location> {
    store: &'a mut NavigationStore<L>,
}

impl<'a, L: Location> Navigator<'a, L> {
    pub fn new(store: &'a mut NavigationStore<L>) -> Self {
        Self { store }
    }

    pub fn go_to(self, destination: Destination) {
        self.store.navigate_to(destination.into_route());
    }

    pub fn go_home(self) {
        self.go_to(Destination::Home);
    }

    /// Product listing, optionally filtered by category and/or type.
    pub fn go_to_products(self, query: ProductsQuery) {
        self.go_to(Destination::Products(query));
    }

    pub fn go_to_product_detail(self, id: impl ToString) {
        self.go_to(Destination::ProductDetail { id: id.to_string() });
    }

    pub fn go_to_categories(self) {
        self.go_to(Destination::Categories);
    }

    pub fn go_to_cart(self) {
        self.go_to(Destination::Cart);
    }

    pub fn go_to_checkout(self) {
        self.go_to(Destination::Checkout);
    }

    pub fn go_to_account(self) {
        self.go_to(Destination::Account);
    }

    pub fn go_to_wishlist(self) {
        self.go_to(Destination::Wishlist);
    }

    /// Search results, optionally pre-seeded with a term.
    pub fn go_to_search(self, query: SearchQuery) {
        self.go_to(Destination::Search(query));
    }

    pub fn go_to_order_tracking(self) {
        self.go_to(Destination::OrderTracking);
    }

    pub fn go_to_about(self) {
        self.go_to(Destination::About);
    }

    pub fn go_to_contact(self) {
        self.go_to(Destination::Contact);
    }
}
