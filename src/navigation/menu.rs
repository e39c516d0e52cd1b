//! Navigation menu built from configuration.

use serde::Serialize;

use crate::config::schema::{AppConfig, NavItemConfig};
use crate::routing::{ActivePath, CurrentPath, MatchOptions, Matcher, PathMatcher};

/// A navigation entry with its compiled matcher.
#[derive(Debug, Clone)]
pub struct NavItem {
    label: String,
    path: String,
    matcher: PathMatcher,
}

impl NavItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>, options: MatchOptions) -> Self {
        let path = path.into();
        let matcher = PathMatcher::new(&path, options);
        Self {
            label: label.into(),
            path,
            matcher,
        }
    }

    fn from_config(config: &NavItemConfig, defaults: MatchOptions) -> Self {
        Self::new(&config.label, &config.path, config.options(defaults))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The path as written in the configuration.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_exact(&self) -> bool {
        self.matcher.is_exact()
    }

    /// Returns true if this item is active for the given current path.
    pub fn is_active_for(&self, current: Option<&str>) -> bool {
        current.is_some_and(|current| self.matcher.matches(current))
    }

    /// Specificity used to pick the current item; deeper paths win.
    fn specificity(&self) -> usize {
        self.matcher.candidate().map_or(0, str::len)
    }
}

/// A menu entry resolved against the current path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry<'a> {
    pub label: &'a str,
    pub path: &'a str,
    pub active: bool,
    /// True for the single most specific active entry.
    pub current: bool,
}

/// An ordered, immutable navigation menu.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    items: Vec<NavItem>,
}

impl NavMenu {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }

    /// Compile the `[[nav]]` entries of a configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let items = config
            .nav
            .iter()
            .map(|item| NavItem::from_config(item, config.matching))
            .collect::<Vec<_>>();

        tracing::debug!(items = items.len(), "Navigation menu compiled");
        Self { items }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolve every item against the current path, in declaration order.
    pub fn resolve<P: CurrentPath>(&self, active: &ActivePath<P>) -> Vec<NavEntry<'_>> {
        let current = active.current();
        let current = current.as_deref();
        let selected = self.select(current);

        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| NavEntry {
                label: item.label(),
                path: item.path(),
                active: item.is_active_for(current),
                current: selected == Some(index),
            })
            .collect()
    }

    /// The most specific active item, if any.
    pub fn current_item<P: CurrentPath>(&self, active: &ActivePath<P>) -> Option<&NavItem> {
        let current = active.current();
        self.select(current.as_deref()).map(|index| &self.items[index])
    }

    fn select(&self, current: Option<&str>) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (index, item) in self.items.iter().enumerate() {
            if !item.is_active_for(current) {
                continue;
            }
            let specificity = item.specificity();
            match best {
                Some((_, best_specificity)) if best_specificity >= specificity => {}
                _ => best = Some((index, specificity)),
            }
        }
        best.map(|(index, _)| index)
    }
}
