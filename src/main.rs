//! robosearch CLI entry point
//!
//! A terminal client for the robotics project search backend. It offers an
//! interactive search screen plus one-shot commands for scripting.
//!
//! # Usage
//!
//! ```bash
//! # Open the search screen (default command)
//! robosearch
//! robosearch browse "ROS2" -t lidar
//!
//! # One-shot search, printed as JSON
//! robosearch search "robotic arm" --source hf --sort growth_week -f json
//!
//! # Print every tag the backend knows
//! robosearch tags
//!
//! # Point at another backend for a single run
//! robosearch --backend http://10.0.0.5:8000 search
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/robosearch/config.toml` on Linux) and are created with
//! defaults on first run. `robosearch config init` walks through them.

use robosearch::{
    RoboSearchError,
    backend::HttpBackend,
    cli::{Cli, Commands},
    commands,
    config::{RoboSearchConfig, validate_backend_url},
    logging::{self, LogTarget, Verbosity},
};
use std::io;
use tokio::runtime::Builder;
use tokio::task::LocalSet;

type Result<T> = std::result::Result<T, RoboSearchError>;

/// Where log output goes for a command
///
/// The search screen owns the terminal, so its logs go to a file.
fn log_target(command: &Commands) -> LogTarget {
    match command {
        Commands::Browse { .. } => logging::log_file_path().map_or(LogTarget::Stderr, LogTarget::File),
        _ => LogTarget::Stderr,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.get_command();

    let verbosity = Verbosity::from_flags(cli.verbose, cli.quiet);
    if let Err(e) = logging::init_subscriber(verbosity, &log_target(&command)) {
        eprintln!("robosearch: logging disabled: {e}");
    }

    let config_path = RoboSearchConfig::config_path()?;

    if let Commands::Completions { shell } = &command {
        commands::completions(*shell, &mut io::stdout());
        return Ok(());
    }
    if let Commands::Config { command } = &command {
        return commands::config(&config_path, command, cli.quiet);
    }

    let config = RoboSearchConfig::load_from(&config_path)?;
    let quiet = cli.quiet || config.quiet;

    let backend_url = match cli.backend.as_deref() {
        Some(url) => validate_backend_url(url)?,
        None => config.backend_url.clone(),
    };
    let backend = HttpBackend::with_timeout(&backend_url, config.request_timeout())?;
    tracing::debug!(backend = %backend_url, "using backend");

    let runtime = Builder::new_current_thread().enable_all().build()?;
    let local = LocalSet::new();

    match command {
        Commands::Browse { query, filters } => {
            let state = filters.apply(query.as_deref(), config.initial_state());
            local.block_on(&runtime, commands::browse(backend, &backend_url, state))
        }
        Commands::Search {
            query,
            filters,
            format,
        } => {
            let state = filters.apply(query.as_deref(), config.initial_state());
            local.block_on(&runtime, commands::search(backend, state, format, quiet))
        }
        Commands::Tags => local.block_on(&runtime, commands::tags(backend, quiet)),
        Commands::Config { .. } | Commands::Completions { .. } => unreachable!(),
    }
}
