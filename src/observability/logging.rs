//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config and environment
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format on request, pretty format otherwise
//! - Writes to stderr

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::ObservabilityConfig;

/// Default filter directive derived from the configured level.
pub fn filter_directive(config: &ObservabilityConfig) -> String {
    format!("active_path={}", config.log_level.to_ascii_lowercase())
}

/// Install the global tracing subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    }
}
