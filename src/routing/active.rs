//! Active-path lookup bound to a current-path provider.
//!
//! # Responsibilities
//! - Bind a `CurrentPath` provider to the path matcher
//! - Re-read the provider on every check
//!
//! # Design Decisions
//! - Stateless apart from the provider; safe to call once per render
//! - Never fails: unknown or invalid input is simply "not active"

use std::borrow::Cow;

use crate::routing::location::CurrentPath;
use crate::routing::matcher::{self, MatchOptions};

/// Bind `provider` and return the `is_active` checker for it.
///
/// ```
/// use active_path::routing::{use_active_path, StaticPath, MatchOptions};
///
/// let active = use_active_path(StaticPath::new("/blog/post"));
/// assert!(active.is_active("/blog"));
/// assert!(!active.is_active_with("/blog", MatchOptions::exact()));
/// ```
pub fn use_active_path<P: CurrentPath>(provider: P) -> ActivePath<P> {
    ActivePath::new(provider)
}

/// Decides whether navigation paths are active for the provider's current path.
#[derive(Debug, Clone)]
pub struct ActivePath<P> {
    provider: P,
}

impl<P: CurrentPath> ActivePath<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The current path as reported by the provider right now.
    pub fn current(&self) -> Option<Cow<'_, str>> {
        self.provider.current_path()
    }

    /// Checks `path` with default options (nested routes match).
    pub fn is_active(&self, path: &str) -> bool {
        self.is_active_with(path, MatchOptions::default())
    }

    /// Checks `path` with explicit match options.
    pub fn is_active_with(&self, path: &str, options: MatchOptions) -> bool {
        let current = self.provider.current_path();
        let active = matcher::is_active(current.as_deref(), path, options);

        tracing::trace!(
            current = current.as_deref().unwrap_or_default(),
            path,
            exact = options.exact,
            active,
            "Active path check"
        );

        active
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::location::{SharedPath, StaticPath};

    #[test]
    fn test_scenarios() {
        let active = use_active_path(StaticPath::new("/blog"));
        assert!(active.is_active("/blog"));

        let active = use_active_path(StaticPath::new("/blog/post"));
        assert!(!active.is_active_with("/blog", MatchOptions::exact()));
        assert!(active.is_active("/blog"));

        let active = use_active_path(StaticPath::new("/about/team/"));
        assert!(active.is_active("/about/team"));

        let active = use_active_path(StaticPath::unknown());
        assert!(!active.is_active("/dashboard"));

        let active = use_active_path(StaticPath::new("/"));
        assert!(active.is_active("/"));

        let active = use_active_path(StaticPath::new("/settings"));
        assert!(!active.is_active("/"));
    }

    #[test]
    fn test_follows_host_navigation() {
        let host = SharedPath::new();
        let active = use_active_path(host.clone());
        assert!(!active.is_active("/inbox"));
        assert_eq!(active.current(), None);

        host.set("/inbox/42");
        assert!(active.is_active("/inbox"));
        assert!(!active.is_active_with("/inbox", MatchOptions::exact()));
        assert_eq!(active.current().as_deref(), Some("/inbox/42"));

        host.set("/outbox");
        assert!(!active.is_active("/inbox"));
    }

    #[test]
    fn test_borrowed_provider() {
        let host = SharedPath::with_path("/team");
        let active = use_active_path(&host);
        assert!(active.is_active("/team"));
        assert_eq!(active.provider().current_path().as_deref(), Some("/team"));
    }
}
