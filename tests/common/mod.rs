//! Shared utilities for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// A menu configuration covering exact, nested and root entries.
#[allow(dead_code)]
pub const SITE_CONFIG: &str = r#"
[observability]
log_level = "debug"

[matching]
exact = false

[[nav]]
label = "Home"
path = "/"
exact = true

[[nav]]
label = "Blog"
path = "/blog/"

[[nav]]
label = "Team"
path = " /about/team}"

[[nav]]
label = "Settings"
path = "/settings"
exact = true
"#;

/// Write `content` to a temporary `.toml` file kept alive by the returned handle.
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
