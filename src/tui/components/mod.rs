//! # TUI Components
//!
//! Pieces of the storefront shell's screen.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `StatusBar`: top line with view title, status and history arrows
//! - `PageView`: body for the view the page resolver selected
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `AddressBar`: the location bar; edits a fragment or a search term
//! - `HistoryPanel`: overlay for jumping through visited locations
//!
//! Components receive external data as props, never by reaching into
//! `App`, so each one can be rendered against a `TestBackend` in its own
//! tests.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── status_bar.rs     (top line)
//! ├── page_view.rs      (resolved view)
//! ├── address_bar.rs    (location bar)
//! └── history_panel.rs  (Ctrl+O overlay)
//! ```

pub mod address_bar;
pub mod history_panel;
pub mod page_view;
pub mod status_bar;

pub use address_bar::{ADDRESS_LABEL, AddressBar, AddressEvent, SEARCH_LABEL};
pub use history_panel::{HistoryEvent, HistoryPanel, HistoryPanelState};
pub use page_view::PageView;
pub use status_bar::StatusBar;
