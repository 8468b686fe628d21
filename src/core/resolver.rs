//! # Page Resolver
//!
//! Maps the current route to the view that renders it. Known pages get
//! their own [`View`], carrying whatever typed parameters that page reads.
//! Unknown pages go through [`UnknownRoutePolicy`]:
//!
//! - `FallbackHome` shows the home view. This is what the storefront has
//!   always done, so it stays the default.
//! - `NotFoundPage` shows a not-found view naming the path instead.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::page::Page;
use crate::core::route::{Destination, ProductsQuery, RouteState, SearchQuery};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownRoutePolicy {
    #[default]
    FallbackHome,
    #[serde(alias = "not-found")]
    #[value(alias = "not-found")]
    NotFoundPage,
}

impl UnknownRoutePolicy {
    /// Parses the config/CLI spelling (`fallback-home`, `not-found`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fallback-home" | "home" => Some(Self::FallbackHome),
            "not-found" | "not-found-page" | "404" => Some(Self::NotFoundPage),
            _ => None,
        }
    }
}

/// What the rendering layer should draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum View {
    Home,
    ProductList {
        category: Option<String>,
        product_type: Option<String>,
    },
    ProductDetail {
        id: String,
    },
    Categories,
    Cart,
    Checkout,
    Account,
    Wishlist,
    SearchResults {
        query: Option<String>,
    },
    OrderTracking,
    About,
    Contact,
    NotFound {
        path: String,
    },
}

impl View {
    /// Heading shown above the page body.
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::ProductList { .. } => "Study Materials",
            View::ProductDetail { .. } => "Product",
            View::Categories => "Categories",
            View::Cart => "Cart",
            View::Checkout => "Checkout",
            View::Account => "My Account",
            View::Wishlist => "Wishlist",
            View::SearchResults { .. } => "Search",
            View::OrderTracking => "Track Order",
            View::About => "About Us",
            View::Contact => "Contact",
            View::NotFound { .. } => "Page Not Found",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PageResolver {
    pub policy: UnknownRoutePolicy,
}

impl PageResolver {
    pub fn new(policy: UnknownRoutePolicy) -> Self {
        Self { policy }
    }

    pub fn resolve(&self, route: &RouteState) -> View {
        match route.destination() {
            Some(destination) => Self::view_for(destination),
            None => {
                debug!("No view for page {}, applying {:?}", route.page, self.policy);
                self.unknown(&route.page)
            }
        }
    }

    fn view_for(destination: Destination) -> View {
        match destination {
            Destination::Home => View::Home,
            Destination::Products(ProductsQuery {
                category,
                product_type,
            }) => View::ProductList {
                category,
                product_type,
            },
            Destination::ProductDetail { id } => View::ProductDetail { id },
            Destination::Categories => View::Categories,
            Destination::Cart => View::Cart,
            Destination::Checkout => View::Checkout,
            Destination::Account => View::Account,
            Destination::Wishlist => View::Wishlist,
            Destination::Search(SearchQuery { q }) => View::SearchResults { query: q },
            Destination::OrderTracking => View::OrderTracking,
            Destination::About => View::About,
            Destination::Contact => View::Contact,
        }
    }

    fn unknown(&self, page: &Page) -> View {
        match self.policy {
            UnknownRoutePolicy::FallbackHome => View::Home,
            UnknownRoutePolicy::NotFoundPage => View::NotFound {
                path: page.as_str().to_string(),
            },
        }
    }
}
