//! Path matching logic.
//!
//! # Responsibilities
//! - Normalize raw paths (whitespace, stray `}`, trailing slash)
//! - Decide exact or nested (child route) matches
//! - Compile a candidate path once for repeated matching
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Missing current path or empty candidate = never matches
//! - Nested match requires a `/` boundary, so `/` is not a universal prefix
//! - No regex, no allocation on the match path

use serde::{Deserialize, Serialize};

/// Options controlling how a candidate path is compared to the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchOptions {
    /// If true, the path must be an exact match.
    /// If false (default), nested child routes match too.
    pub exact: bool,
}

impl MatchOptions {
    /// Only the path itself is active.
    pub fn exact() -> Self {
        Self { exact: true }
    }

    /// The path and all of its children are active.
    pub fn nested() -> Self {
        Self { exact: false }
    }
}

/// Normalize a raw path for comparison.
///
/// Trims whitespace (including the U+FEFF byte order mark), then drops one
/// trailing `}` and one trailing `/`. An empty result becomes the root path `/`.
pub fn normalize(path: &str) -> &str {
    let trimmed = path.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let trimmed = trimmed.strip_suffix('}').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Compare two already-normalized paths.
fn normalized_matches(current: &str, candidate: &str, exact: bool) -> bool {
    if current == candidate {
        return true;
    }
    if exact {
        return false;
    }

    current
        .strip_prefix(candidate)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Returns true if `candidate` is active for the `current` path.
///
/// An absent or empty current path, or an empty candidate, is never active.
pub fn is_active(current: Option<&str>, candidate: &str, options: MatchOptions) -> bool {
    let Some(current) = current.filter(|c| !c.is_empty()) else {
        return false;
    };
    if candidate.is_empty() {
        return false;
    }

    normalized_matches(normalize(current), normalize(candidate), options.exact)
}

/// Trait for matching a current path against a precompiled condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the current path matches this condition.
    fn matches(&self, current: &str) -> bool;
}

/// A candidate path normalized once and matched against many current paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatcher {
    /// Normalized candidate; `None` when the raw candidate was empty.
    candidate: Option<String>,
    exact: bool,
}

impl PathMatcher {
    /// Create a new path matcher.
    pub fn new(candidate: impl AsRef<str>, options: MatchOptions) -> Self {
        let raw = candidate.as_ref();
        let candidate = (!raw.is_empty()).then(|| normalize(raw).to_string());

        Self {
            candidate,
            exact: options.exact,
        }
    }

    /// The normalized candidate path, if there is one.
    pub fn candidate(&self) -> Option<&str> {
        self.candidate.as_deref()
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }
}

impl Matcher for PathMatcher {
    fn matches(&self, current: &str) -> bool {
        match &self.candidate {
            Some(candidate) if !current.is_empty() => {
                normalized_matches(normalize(current), candidate, self.exact)
            }
            _ => false,
        }
    }
}
