//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for navigation
//! matching. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::MatchOptions;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Default match options for navigation items.
    pub matching: MatchOptions,

    /// Navigation menu entries, in display order.
    pub nav: Vec<NavItemConfig>,
}

/// A single navigation menu entry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NavItemConfig {
    /// Text shown in the menu; unique within the menu.
    pub label: String,

    /// Path the entry links to.
    pub path: String,

    /// Overrides `matching.exact` for this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
}

impl NavItemConfig {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            exact: None,
        }
    }

    /// Effective match options given the menu-wide defaults.
    pub fn options(&self, defaults: MatchOptions) -> MatchOptions {
        MatchOptions {
            exact: self.exact.unwrap_or(defaults.exact),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.observability.log_level, "warn");
        assert!(!config.matching.exact);
        assert!(config.nav.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [observability]
            log_level = "debug"
            json = true

            [matching]
            exact = true

            [[nav]]
            label = "Home"
            path = "/"

            [[nav]]
            label = "Blog"
            path = "/blog"
            exact = false
            "#,
        )
        .unwrap();

        assert_eq!(config.observability.log_level, "debug");
        assert!(config.observability.json);
        assert_eq!(config.nav.len(), 2);
        assert_eq!(config.nav[0].options(config.matching), MatchOptions::exact());
        assert_eq!(config.nav[1].options(config.matching), MatchOptions::nested());
    }
}
