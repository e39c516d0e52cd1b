//! Navigation menus.
//!
//! # Data Flow
//! ```text
//! AppConfig.nav (NavItemConfig[])
//!     → menu.rs (compile each entry into a PathMatcher)
//!     → NavMenu (immutable)
//!
//! Per render:
//!     ActivePath (current path from host)
//!     → NavMenu::resolve / NavMenu::current_item
//!     → entries with active flags
//! ```
//!
//! # Design Decisions
//! - Items compiled once, matched many times
//! - Several items may be active at once (parent + child)
//! - `current_item` picks the most specific active item; declaration order breaks ties

pub mod menu;

pub use menu::{NavEntry, NavItem, NavMenu};
