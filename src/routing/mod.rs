//! Path matching subsystem.
//!
//! # Data Flow
//! ```text
//! Host environment (navigation, render)
//!     → location.rs (CurrentPath provider)
//!     → active.rs (ActivePath bound to provider)
//!     → matcher.rs (normalize + exact/nested comparison)
//!     → Return: active or not
//! ```
//!
//! # Design Decisions
//! - Current path is read on every check, never cached
//! - No regex, no pattern syntax (plain prefix matching only)
//! - Deterministic: same inputs always give the same answer

pub mod active;
pub mod location;
pub mod matcher;

pub use active::{use_active_path, ActivePath};
pub use location::{from_fn, CurrentPath, FnPath, SharedPath, StaticPath};
pub use matcher::{is_active, normalize, MatchOptions, Matcher, PathMatcher};
