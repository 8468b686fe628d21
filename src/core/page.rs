//! # Page Identifiers
//!
//! The closed set of screens the storefront knows about. Anything else a
//! location can name is carried through as [`Page::Unknown`] so the page
//! resolver can decide what to do with it.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Products,
    ProductDetail,
    Categories,
    Cart,
    Checkout,
    Account,
    Wishlist,
    Search,
    OrderTracking,
    About,
    Contact,
    /// An identifier outside the known set, kept verbatim.
    Unknown(String),
}

impl Page {
    /// Every known page, in menu order.
    pub const KNOWN: [Page; 12] = [
        Page::Home,
        Page::Products,
        Page::ProductDetail,
        Page::Categories,
        Page::Cart,
        Page::Checkout,
        Page::Account,
        Page::Wishlist,
        Page::Search,
        Page::OrderTracking,
        Page::About,
        Page::Contact,
    ];

    /// Looks up a known identifier. Returns `None` for anything outside the set.
    pub fn from_known(identifier: &str) -> Option<Page> {
        Self::KNOWN
            .iter()
            .find(|page| page.as_str() == identifier)
            .cloned()
    }

    /// Parses any identifier, falling back to `Unknown`.
    pub fn parse(identifier: &str) -> Page {
        Self::from_known(identifier).unwrap_or_else(|| Page::Unknown(identifier.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Page::Home => "home",
            Page::Products => "products",
            Page::ProductDetail => "product-detail",
            Page::Categories => "categories",
            Page::Cart => "cart",
            Page::Checkout => "checkout",
            Page::Account => "account",
            Page::Wishlist => "wishlist",
            Page::Search => "search",
            Page::OrderTracking => "order-tracking",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Page::Unknown(_))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Page {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identifiers_round_trip() {
        for page in Page::KNOWN.iter() {
            assert_eq!(Page::parse(page.as_str()), *page);
            assert!(page.is_known());
        }
    }

    #[test]
    fn test_unknown_identifier_is_kept_verbatim() {
        let page = Page::parse("Blog/Posts");
        assert_eq!(page, Page::Unknown("Blog/Posts".to_string()));
        assert_eq!(page.as_str(), "Blog/Posts");
        assert!(!page.is_known());
    }

    #[test]
    fn test_from_known_is_case_sensitive() {
        assert_eq!(Page::from_known("Cart"), None);
        assert_eq!(Page::from_known("cart"), Some(Page::Cart));
    }

    #[test]
    fn test_serializes_as_identifier() {
        let json = serde_json::to_string(&Page::OrderTracking).unwrap();
        assert_eq!(json, "\"order-tracking\"");
    }
}
