//! # Core Navigation Logic
//!
//! This module contains the storefront's routing core.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • codec (fragment ⇄    │
//!                    │    route state)         │
//!                    │  • store + facade       │
//!                    │  • resolver (→ View)    │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No net.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    CLI     │      │    Web     │
//!     │  Adapter   │      │ subcommands│      │  (future)  │
//!     │ (ratatui)  │      │  (JSON)    │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`page`]: The closed set of page identifiers
//! - [`route`]: `RouteState` and the typed `Destination` records
//! - [`codec`]: Fragment decode/encode
//! - [`location`]: The `Location` trait and `MemoryHistory`
//! - [`store`]: `NavigationStore`, the single holder of route state
//! - [`facade`]: `Navigator`, one method per destination
//! - [`resolver`]: Route → `View`, with the unknown-route policy
//! - [`state`]: The `App` struct
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod codec;
pub mod config;
pub mod facade;
pub mod location;
pub mod page;
pub mod resolver;
pub mod route;
pub mod state;
pub mod store;

pub use location::{Location, MemoryHistory};
pub use page::Page;
pub use resolver::{PageResolver, UnknownRoutePolicy, View};
pub use route::{Destination, Params, ProductsQuery, RouteState, SearchQuery};
pub use store::NavigationStore;
