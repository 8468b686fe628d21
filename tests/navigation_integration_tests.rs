use std::cell::RefCell;
use std::rc::Rc;

use storefront::core::action::{Action, deliver_location_changes, update};
use storefront::core::codec::{decode, encode, from_href, href};
use storefront::core::config::{CliOverrides, parse_config, resolve};
use storefront::core::location::{Location, MemoryHistory};
use storefront::core::page::Page;
use storefront::core::resolver::{PageResolver, UnknownRoutePolicy, View};
use storefront::core::route::{Destination, Params, ProductsQuery, RouteState, SearchQuery};
use storefront::core::state::App;
use storefront::core::store::NavigationStore;

// ============================================================================
// Helper Functions
// ============================================================================

fn store_at(fragment: &str) -> NavigationStore<MemoryHistory> {
    NavigationStore::new(MemoryHistory::new(fragment))
}

/// Subscribes an observer that records the page of every notification.
fn record_pages(store: &mut NavigationStore<MemoryHistory>) -> Rc<RefCell<Vec<Page>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |route: &RouteState| sink.borrow_mut().push(route.page.clone()));
    seen
}

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// URL Codec
// ============================================================================

#[test]
fn test_decode_never_fails_on_odd_input() {
    for fragment in ["", "#", "##", "?", "#?&&=", "#%", "#%zz?q=%", "#products/", "#/", "?=&="] {
        for route in [decode(fragment), from_href(fragment)] {
            assert!(!route.page.as_str().is_empty(), "empty page for {:?}", fragment);
            assert_eq!(decode(&encode(&route)).page, route.page, "page for {:?}", fragment);
        }
    }
}

#[test]
fn test_known_pages_round_trip() {
    let known = [
        Page::Home,
        Page::Products,
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
    for page in known {
        let route = RouteState::page(page.clone()).with_param("category", "JEE Main");
        assert_eq!(decode(&encode(&route)), route, "round trip for {}", page);
    }
}

#[test]
fn test_empty_query_key_round_trips() {
    let route = RouteState::page(Page::Checkout)
        .with_param("", "gift")
        .with_param("coupon", "NEET10");
    assert_eq!(decode(&encode(&route)), route);
}

#[test]
fn test_product_detail_id_round_trips_through_path() {
    let route = RouteState::page(Page::ProductDetail).with_param("id", "neet 2024/a");
    let fragment = encode(&route);
    assert!(fragment.starts_with("products/"));
    assert!(!fragment.contains("id="));
    assert_eq!(decode(&fragment), route);
}

#[test]
fn test_empty_fragment_is_home() {
    assert_eq!(decode(""), RouteState::home());
    assert_eq!(from_href("#"), RouteState::home());
}

#[test]
fn test_unknown_page_passes_through_codec() {
    let route = from_href("#flash-sale?ref=mail");
    assert_eq!(route.page, Page::Unknown("flash-sale".to_string()));
    assert_eq!(route.param("ref"), Some("mail"));
    assert_eq!(href(&route), "#flash-sale?ref=mail");
}

// ============================================================================
// Navigation Store
// ============================================================================

#[test]
fn test_initial_load_reads_location_without_writing() {
    let store = store_at("#products?category=NEET&type=book");
    assert_eq!(store.current().page, Page::Products);
    assert_eq!(store.current().param("category"), Some("NEET"));
    assert_eq!(store.current().param("type"), Some("book"));
    assert_eq!(store.location().entries().len(), 1);
}

#[test]
fn test_external_change_is_idempotent() {
    let mut store = store_at("#cart");
    let seen = record_pages(&mut store);

    assert!(!store.on_external_change());
    assert!(!store.on_external_change());
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_navigate_then_echo_notifies_once() {
    let mut store = store_at("");
    let seen = record_pages(&mut store);

    store.navigate(Page::Search, params(&[("q", "organic chemistry")]));
    assert_eq!(store.location().fragment(), "#search?q=organic%20chemistry");
    assert_eq!(store.location().pending_changes(), 1);

    // The location reports the change back; nothing new happens.
    assert!(store.location_mut().take_change());
    assert!(!store.on_external_change());
    assert_eq!(*seen.borrow(), vec![Page::Search]);
}

#[test]
fn test_unsubscribed_observer_is_not_called() {
    let mut store = store_at("");
    let seen = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&seen);
    let id = store.subscribe(move |_: &RouteState| *sink.borrow_mut() += 1);

    store.navigator().go_to_cart();
    assert!(store.unsubscribe(id));
    store.navigator().go_to_wishlist();

    assert_eq!(*seen.borrow(), 1);
    assert_eq!(store.observer_count(), 0);
}

// ============================================================================
// Navigation Facade
// ============================================================================

#[test]
fn test_facade_product_detail_fragment() {
    let mut store = store_at("");
    store.navigator().go_to_product_detail(42);
    assert_eq!(store.location().fragment(), "#products/42");
    assert_eq!(store.current().param("id"), Some("42"));
}

#[test]
fn test_facade_products_with_filters() {
    let mut store = store_at("");
    store
        .navigator()
        .go_to_products(ProductsQuery::category("NEET").with_type("book"));
    assert_eq!(store.location().fragment(), "#products?category=NEET&type=book");
}

#[test]
fn test_facade_search_without_term() {
    let mut store = store_at("#cart");
    store.navigator().go_to_search(SearchQuery::default());
    assert_eq!(store.location().fragment(), "#search");
}

// ============================================================================
// Page Resolver
// ============================================================================

#[test]
fn test_unknown_route_falls_back_to_home_by_default() {
    let resolver = PageResolver::default();
    assert_eq!(resolver.resolve(&from_href("#nonexistent")), View::Home);
}

#[test]
fn test_unknown_route_not_found_policy() {
    let resolver = PageResolver::new(UnknownRoutePolicy::NotFoundPage);
    assert_eq!(
        resolver.resolve(&from_href("#nonexistent")),
        View::NotFound {
            path: "nonexistent".to_string()
        }
    );
}

#[test]
fn test_bare_product_detail_is_not_a_product() {
    let resolver = PageResolver::new(UnknownRoutePolicy::NotFoundPage);
    assert!(matches!(
        resolver.resolve(&from_href("#product-detail")),
        View::NotFound { .. }
    ));
}

// ============================================================================
// End to End
// ============================================================================

#[test]
fn test_browse_cart_and_back() {
    let mut app = App::new(
        MemoryHistory::new("#products?category=NEET"),
        UnknownRoutePolicy::default(),
    );
    assert_eq!(
        app.view(),
        View::ProductList {
            category: Some("NEET".to_string()),
            product_type: None,
        }
    );

    update(&mut app, Action::Navigate(Destination::Cart));
    deliver_location_changes(&mut app);
    assert_eq!(app.view(), View::Cart);
    assert_eq!(app.store.location().fragment(), "#cart");

    update(&mut app, Action::Back);
    deliver_location_changes(&mut app);
    assert_eq!(app.store.current().page, Page::Products);
    assert_eq!(app.store.current().param("category"), Some("NEET"));

    update(&mut app, Action::Forward);
    deliver_location_changes(&mut app);
    assert_eq!(app.view(), View::Cart);
}

#[test]
fn test_typed_address_is_delivered_as_change() {
    let mut app = App::new(MemoryHistory::new(""), UnknownRoutePolicy::NotFoundPage);
    update(&mut app, Action::EnterLocation("#products/7".to_string()));
    assert_eq!(deliver_location_changes(&mut app), 1);
    assert_eq!(app.view(), View::ProductDetail { id: "7".to_string() });
}

#[test]
fn test_config_file_sets_policy_and_cli_wins() {
    let config = parse_config(
        r##"
[router]
start_location = "#about"
unknown_route = "not-found"
"##,
    )
    .unwrap();

    let resolved = resolve(&config, &CliOverrides::default());
    assert_eq!(resolved.unknown_route, UnknownRoutePolicy::NotFoundPage);

    let cli = CliOverrides {
        location: Some("#contact".to_string()),
        unknown_route: Some(UnknownRoutePolicy::FallbackHome),
    };
    let resolved = resolve(&config, &cli);
    assert_eq!(resolved.start_location, "#contact");
    assert_eq!(resolved.unknown_route, UnknownRoutePolicy::FallbackHome);

    let app = App::from_config(&resolved);
    assert_eq!(app.view(), View::Contact);
}
