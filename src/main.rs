//! Command-line front end for active path checks.
//!
//! # Commands
//! - `check`: is one path active for a given current path?
//! - `nav`: which configured menu entries are active?
//!
//! # Exit Status
//! - `0`: success (`check`: the path is active)
//! - `1`: `check` only, the path is not active
//! - `2`: usage, configuration or output error

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use active_path::config::{load_config, AppConfig};
use active_path::navigation::{NavEntry, NavMenu};
use active_path::observability::init_logging;
use active_path::routing::{use_active_path, MatchOptions, StaticPath};

/// Exit status for errors; matches what clap uses for usage errors.
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "active-path")]
#[command(about = "Check which navigation paths are active for a location", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a single path is active
    Check {
        /// Path to test, e.g. /blog
        candidate: String,

        /// Current location; omit when unknown
        #[arg(long)]
        current: Option<String>,

        /// Require an exact match
        #[arg(long, conflicts_with = "nested")]
        exact: bool,

        /// Let child routes match too
        #[arg(long)]
        nested: bool,
    },
    /// Show the navigation menu with active entries
    Nav {
        /// Current location; omit when unknown
        #[arg(long)]
        current: Option<String>,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    init_logging(&config.observability)?;

    tracing::debug!(
        config = ?cli.config,
        nav_items = config.nav.len(),
        exact_by_default = config.matching.exact,
        "Configuration loaded"
    );

    let mut stdout = std::io::stdout().lock();
    execute(cli.command, &config, &mut stdout)
}

/// Run a command against a loaded configuration, writing results to `out`.
fn execute(
    command: Commands,
    config: &AppConfig,
    out: &mut impl Write,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Commands::Check {
            candidate,
            current,
            exact,
            nested,
        } => {
            let active = use_active_path(StaticPath::from(current));
            let options = match (exact, nested) {
                (true, _) => MatchOptions::exact(),
                (false, true) => MatchOptions::nested(),
                (false, false) => config.matching,
            };

            if active.is_active_with(&candidate, options) {
                writeln!(out, "active")?;
                Ok(ExitCode::SUCCESS)
            } else {
                writeln!(out, "inactive")?;
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Nav { current, json } => {
            let menu = NavMenu::from_config(config);
            if menu.is_empty() {
                tracing::warn!("No [[nav]] entries configured");
            }

            let active = use_active_path(StaticPath::from(current));
            let entries = menu.resolve(&active);

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
            } else {
                render_menu(&entries, out)?;
            }

            Ok(ExitCode::SUCCESS)
        }
    }
}

/// One line per entry: `*` marks the current entry, `+` other active ones.
fn render_menu(entries: &[NavEntry<'_>], out: &mut impl Write) -> std::io::Result<()> {
    let width = entries.iter().map(|e| e.label.len()).max().unwrap_or(0);
    for entry in entries {
        let marker = match (entry.current, entry.active) {
            (true, _) => '*',
            (false, true) => '+',
            (false, false) => ' ',
        };
        writeln!(out, "{marker} {:<width$}  {}", entry.label, entry.path)?;
    }
    Ok(())
}
