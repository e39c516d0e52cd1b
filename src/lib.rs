//! Active navigation path detection.
//!
//! Tells navigation components (menus, tabs, breadcrumbs) whether a path is
//! active for the location the host UI is currently displaying.

pub mod config;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::AppConfig;
pub use navigation::NavMenu;
pub use routing::{use_active_path, ActivePath, CurrentPath, MatchOptions};
