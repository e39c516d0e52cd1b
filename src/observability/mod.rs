//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (config load, menu compile, path checks)
//!     → logging.rs (filter + format)
//!     → stderr (stdout is reserved for command output)
//! ```
//!
//! # Design Decisions
//! - Structured logging via `tracing`
//! - `RUST_LOG` wins over the configured level
//! - Path checks log at `trace` so they cost nothing when filtered out

pub mod logging;

pub use logging::init_logging;
