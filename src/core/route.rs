//! # Route State
//!
//! Where the user is: a [`Page`] plus its string parameters.
//!
//! ```text
//! RouteState
//! ├── page: Page                       // known identifier or Unknown(raw)
//! └── params: BTreeMap<String, String> // category, type, id, q, ...
//! ```
//!
//! `params` stays an open map because the location fragment can carry
//! anything. Code that wants compile-time shape goes through
//! [`Destination`], the typed view over the recognized keys.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::page::Page;

pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_TYPE: &str = "type";
pub const PARAM_ID: &str = "id";
pub const PARAM_QUERY: &str = "q";

pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteState {
    pub page: Page,
    pub params: Params,
}

impl RouteState {
    pub fn new(page: Page, params: Params) -> Self {
        Self { page, params }
    }

    /// A route with no parameters.
    pub fn page(page: Page) -> Self {
        Self::new(page, Params::new())
    }

    pub fn home() -> Self {
        Self::page(Page::Home)
    }

    /// Builder-style parameter insert.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Typed view of this route. `None` for unknown pages and for a
    /// product detail route that lacks its `id`.
    pub fn destination(&self) -> Option<Destination> {
        let owned = |key: &str| self.param(key).map(str::to_string);
        let destination = match self.page {
            Page::Home => Destination::Home,
            Page::Products => Destination::Products(ProductsQuery {
                category: owned(PARAM_CATEGORY),
                product_type: owned(PARAM_TYPE),
            }),
            Page::ProductDetail => Destination::ProductDetail { id: owned(PARAM_ID)? },
            Page::Categories => Destination::Categories,
            Page::Cart => Destination::Cart,
            Page::Checkout => Destination::Checkout,
            Page::Account => Destination::Account,
            Page::Wishlist => Destination::Wishlist,
            Page::Search => Destination::Search(SearchQuery { q: owned(PARAM_QUERY) }),
            Page::OrderTracking => Destination::OrderTracking,
            Page::About => Destination::About,
            Page::Contact => Destination::Contact,
            Page::Unknown(_) => return None,
        };
        Some(destination)
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::home()
    }
}

/// Filters for the product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductsQuery {
    /// Category name, e.g. `NEET` or `JEE`.
    pub category: Option<String>,
    /// Product type tag, e.g. `books` or `test-series`.
    pub product_type: Option<String>,
}

impl ProductsQuery {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            product_type: None,
        }
    }

    pub fn with_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text search term used to pre-seed the search page.
    pub q: Option<String>,
}

impl SearchQuery {
    pub fn term(q: impl Into<String>) -> Self {
        Self { q: Some(q.into()) }
    }
}

/// Every place the storefront can navigate to, with its typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Home,
    Products(ProductsQuery),
    ProductDetail { id: String },
    Categories,
    Cart,
    Checkout,
    Account,
    Wishlist,
    Search(SearchQuery),
    OrderTracking,
    About,
    Contact,
}

impl Destination {
    pub fn page(&self) -> Page {
        match self {
            Destination::Home => Page::Home,
            Destination::Products(_) => Page::Products,
            Destination::ProductDetail { .. } => Page::ProductDetail,
            Destination::Categories => Page::Categories,
            Destination::Cart => Page::Cart,
            Destination::Checkout => Page::Checkout,
            Destination::Account => Page::Account,
            Destination::Wishlist => Page::Wishlist,
            Destination::Search(_) => Page::Search,
            Destination::OrderTracking => Page::OrderTracking,
            Destination::About => Page::About,
            Destination::Contact => Page::Contact,
        }
    }

    pub fn into_route(self) -> RouteState {
        let mut params = Params::new();
        let page = self.page();
        match self {
            Destination::Products(query) => {
                if let Some(category) = query.category {
                    params.insert(PARAM_CATEGORY.to_string(), category);
                }
                if let Some(product_type) = query.product_type {
                    params.insert(PARAM_TYPE.to_string(), product_type);
                }
            }
            Destination::ProductDetail { id } => {
                params.insert(PARAM_ID.to_string(), id);
            }
            Destination::Search(query) => {
                if let Some(q) = query.q {
                    params.insert(PARAM_QUERY.to_string(), q);
                }
            }
            _ => {}
        }
        RouteState::new(page, params)
    }
}

impl From<Destination> for RouteState {
    fn from(destination: Destination) -> Self {
        destination.into_route()
    }
}
