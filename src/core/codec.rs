//! # URL Codec
//!
//! Pure mapping between a location fragment (everything after `#`) and a
//! [`RouteState`].
//!
//! ```text
//! "products/42?ref=home"   ──decode──►  { page: product-detail, params: { id: 42, ref: home } }
//! { page: cart, params: {} } ──encode──►  "cart"
//! ```
//!
//! Decoding never fails. Anything it cannot place becomes an unknown page,
//! and the page resolver decides how to show that.

use log::debug;
use std::borrow::Cow;

use crate::core::page::Page;
use crate::core::route::{PARAM_ID, Params, RouteState};

/// Path prefix that carries a product id in the path instead of the query.
pub const PRODUCT_PATH_PREFIX: &str = "products/";

/// Decode a fragment (the text after `#`) into route state.
///
/// The input is taken as is: `"#cart"` names a page called `#cart`. Use
/// [`from_href`] for a full address-bar location.
pub fn decode(fragment: &str) -> RouteState {
    let (path, query) = match fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (fragment, ""),
    };

    let mut params = parse_query(query);

    let page = if let Some(rest) = path.strip_prefix(PRODUCT_PATH_PREFIX) {
        let id = rest.split('/').next().unwrap_or_default();
        params.insert(PARAM_ID.to_string(), decode_component(id));
        Page::ProductDetail
    } else if path.is_empty() {
        Page::Home
    } else {
        match Page::from_known(path) {
            // A bare product-detail path only names a product when the query supplies one.
            Some(Page::ProductDetail) if !params.contains_key(PARAM_ID) => {
                Page::Unknown(path.to_string())
            }
            Some(page) => page,
            None => Page::Unknown(path.to_string()),
        }
    };

    debug!("Decoded fragment {:?} as page {} with {} params", fragment, page, params.len());
    RouteState { page, params }
}

/// Encode route state into a fragment, without the leading `#`.
///
/// Parameters are emitted in key order, so equal states always encode to
/// the same string.
pub fn encode(route: &RouteState) -> String {
    let mut path = route.page.as_str().to_string();
    let mut remaining: Vec<(&String, &String)> = Vec::with_capacity(route.params.len());

    for (key, value) in &route.params {
        if route.page == Page::ProductDetail && key == PARAM_ID {
            path = format!("{}{}", PRODUCT_PATH_PREFIX, urlencoding::encode(value));
        } else {
            remaining.push((key, value));
        }
    }

    if remaining.is_empty() {
        return path;
    }

    let query = remaining
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

/// Encode route state as an address-bar location (`#<fragment>`).
pub fn href(route: &RouteState) -> String {
    format!("#{}", encode(route))
}

/// Decode an address-bar location (`#<fragment>`). The inverse of [`href`].
pub fn from_href(location: &str) -> RouteState {
    decode(location.strip_prefix('#').unwrap_or(location))
}

/// Reduce a state to the form it will have after a trip through the
/// location bar.
pub fn canonicalize(route: &RouteState) -> RouteState {
    decode(&encode(route))
}

fn parse_query(query: &str) -> Params {
    let mut params = Params::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        // Later duplicates overwrite earlier ones.
        params.insert(decode_component(key), decode_component(value));
    }
    params
}

/// Percent-decode one query or path component. `+` is a space, and
/// sequences that do not decode to UTF-8 are kept as written.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| spaced.clone())
}
