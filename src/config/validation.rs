//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check navigation entries are usable paths with unique labels
//! - Check the log level is one tracing understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::AppConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("nav entry #{index} has an empty label")]
    EmptyLabel { index: usize },

    #[error("nav entry '{label}' has an empty path")]
    EmptyPath { label: String },

    #[error("nav entry '{label}' path '{path}' must start with '/'")]
    RelativePath { label: String, path: String },

    #[error("nav label '{label}' is used more than once")]
    DuplicateLabel { label: String },

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    let mut seen = HashSet::new();
    for (index, item) in config.nav.iter().enumerate() {
        if item.label.trim().is_empty() {
            errors.push(ValidationError::EmptyLabel { index });
        } else if !seen.insert(item.label.as_str()) {
            errors.push(ValidationError::DuplicateLabel {
                label: item.label.clone(),
            });
        }

        let path = item.path.trim();
        if path.is_empty() {
            errors.push(ValidationError::EmptyPath {
                label: item.label.clone(),
            });
        } else if !path.starts_with('/') {
            errors.push(ValidationError::RelativePath {
                label: item.label.clone(),
                path: item.path.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
