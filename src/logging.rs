//! Tracing subscriber initialization
//!
//! Wires the `-v`/`-q` flags and the `ROBOSEARCH_LOG`/`RUST_LOG` environment
//! variables into one `tracing-subscriber` stack.
//!
//! # Priority (highest to lowest)
//!
//! 1. `ROBOSEARCH_LOG` env var (per-target directives, e.g. `robosearch=debug`)
//! 2. `RUST_LOG` env var
//! 3. CLI flags (`-v` gives debug, `-q` gives error)
//! 4. Default level: `warn`
//!
//! Line-oriented commands log to stderr. The terminal UI owns the screen, so
//! it logs to a file in the cache directory instead.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable checked before `RUST_LOG`
pub const LOG_ENV: &str = "ROBOSEARCH_LOG";

/// Verbosity level derived from CLI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet` / `-q`: only errors
    Quiet,
    /// Default: warnings and above
    Normal,
    /// `--verbose` / `-v`: debug output from this crate
    Verbose,
}

impl Verbosity {
    /// Determine verbosity from the parsed CLI flags; verbose wins over quiet
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }

    fn default_directive(self) -> String {
        let level = self.default_level();
        if self == Self::Verbose {
            format!("{},robosearch=debug", Level::INFO)
        } else {
            level.to_string()
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Default log file for the terminal UI
#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("robosearch").join("robosearch.log"))
}

/// Install the global subscriber
///
/// Calling this twice is harmless; the second subscriber is rejected and an
/// error returned.
///
/// # Errors
///
/// Returns `io::Error` if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_subscriber(verbosity: Verbosity, target: &LogTarget) -> io::Result<()> {
    let filter = build_env_filter(verbosity);

    let result = match target {
        LogTarget::Stderr => {
            let use_ansi = io::IsTerminal::is_terminal(&io::stderr());
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(use_ansi)
                .with_target(true)
                .without_time()
                .compact();
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::uptime());
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
    };

    result.map_err(|e| io::Error::other(e.to_string()))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Build an `EnvFilter` from `ROBOSEARCH_LOG`, then `RUST_LOG`, then flags
///
/// Unparseable directives fall through to the next source.
fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV)
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::try_new(verbosity.default_directive())
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_level().as_str()))
}
