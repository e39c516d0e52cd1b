//! Current-path providers.
//!
//! # Responsibilities
//! - Abstract the host environment's "where am I" accessor
//! - Provide fixed, callback-backed and shared (host-updated) sources
//!
//! # Design Decisions
//! - The provider is read on every match; nothing is cached
//! - `SharedPath` uses an atomic swap so readers never wait on the host

use std::borrow::Cow;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

/// Source of the path the host UI is currently displaying.
pub trait CurrentPath {
    /// Returns the current path, or `None` while it is unknown.
    fn current_path(&self) -> Option<Cow<'_, str>>;
}

/// A provider backed by a host callback, see [`from_fn`].
#[derive(Clone)]
pub struct FnPath<F>(F);

/// Wrap a host accessor closure as a [`CurrentPath`].
pub fn from_fn<F>(f: F) -> FnPath<F>
where
    F: Fn() -> Option<String>,
{
    FnPath(f)
}

impl<F> std::fmt::Debug for FnPath<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPath").finish_non_exhaustive()
    }
}

impl<F> CurrentPath for FnPath<F>
where
    F: Fn() -> Option<String>,
{
    fn current_path(&self) -> Option<Cow<'_, str>> {
        (self.0)().map(Cow::Owned)
    }
}

impl<T: CurrentPath + ?Sized> CurrentPath for &T {
    fn current_path(&self) -> Option<Cow<'_, str>> {
        (**self).current_path()
    }
}

impl<T: CurrentPath + ?Sized> CurrentPath for Arc<T> {
    fn current_path(&self) -> Option<Cow<'_, str>> {
        (**self).current_path()
    }
}

/// A path fixed at construction, e.g. for a single server-side render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPath(Option<String>);

impl StaticPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(Some(path.into()))
    }

    /// A provider that never knows the current path.
    pub fn unknown() -> Self {
        Self(None)
    }
}

impl From<Option<String>> for StaticPath {
    fn from(path: Option<String>) -> Self {
        Self(path)
    }
}

impl From<&str> for StaticPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl CurrentPath for StaticPath {
    fn current_path(&self) -> Option<Cow<'_, str>> {
        self.0.as_deref().map(Cow::Borrowed)
    }
}

/// A current path the host updates on navigation while readers match against it.
///
/// Clones share the same underlying value.
#[derive(Debug, Clone, Default)]
pub struct SharedPath {
    inner: Arc<ArcSwapOption<String>>,
}

impl SharedPath {
    /// Create a shared path starting out unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared path with an initial value.
    pub fn with_path(path: impl Into<String>) -> Self {
        let shared = Self::new();
        shared.set(path);
        shared
    }

    /// Record a navigation to `path`.
    pub fn set(&self, path: impl Into<String>) {
        let path = path.into();
        tracing::debug!(path = %path, "Current path updated");
        self.inner.store(Some(Arc::new(path)));
    }

    /// Forget the current path (e.g. between route transitions).
    pub fn clear(&self) {
        tracing::debug!("Current path cleared");
        self.inner.store(None);
    }
}

impl CurrentPath for SharedPath {
    fn current_path(&self) -> Option<Cow<'_, str>> {
        self.inner
            .load()
            .as_deref()
            .map(|path| Cow::Owned(path.clone()))
    }
}
