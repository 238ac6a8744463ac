//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for robosearch using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive search screen (default)
//! - **search**: One-shot search printed as text, JSON, or CSV
//! - **tags**: Print the tag catalog
//! - **config**: Show or change configuration
//! - **completions**: Generate shell completions
//!
//! Global flags (`-q`, `-v`, `--backend`) apply to every command.

use crate::output::OutputFormat;
use crate::project::{SortOption, SourceFilter};
use crate::query::QueryState;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "robosearch")]
#[command(about = "Search robotics projects from GitHub and Hugging Face", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Emit debug logs
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides config)
    #[arg(long = "backend", value_name = "URL", global = true)]
    pub backend: Option<String>,
}

/// Filters shared by `browse` and `search`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Restrict results to one source (overrides config)
    #[arg(short = 's', long = "source", value_enum, value_name = "SOURCE")]
    pub source: Option<SourceFilter>,

    /// Select a tag (can specify multiple: -t ros2 -t lidar)
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Result ordering (overrides config)
    #[arg(long = "sort", value_enum, value_name = "SORT")]
    pub sort: Option<SortOption>,
}

impl FilterArgs {
    /// Apply these filters and `query` on top of a starting state
    ///
    /// Tags are selected in the order given; repeats are ignored.
    #[must_use]
    pub fn apply(&self, query: Option<&str>, mut state: QueryState) -> QueryState {
        if let Some(query) = query {
            let _ = state.set_query(query);
        }
        if let Some(source) = self.source {
            let _ = state.set_source(source);
        }
        if let Some(sort) = self.sort {
            let _ = state.set_sort(sort);
        }
        for tag in &self.tags {
            if !state.is_tag_selected(tag) {
                let _ = state.toggle_tag(tag);
            }
        }
        state
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive search screen (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial query text
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Run one search and print the results
    #[command(visible_alias = "s")]
    Search {
        /// Query text (empty matches everything)
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List every tag known to the backend
    Tags,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,
    /// Print the config file location
    Path,
    /// Run the interactive setup wizard
    Init,
    /// Set the backend base URL
    SetBackend {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Set the default source filter
    SetSource {
        #[arg(value_enum)]
        source: SourceFilter,
    },
    /// Set the default sort option
    SetSort {
        #[arg(value_enum)]
        sort: SortOption,
    },
    /// Set the request timeout in seconds (omit to disable)
    SetTimeout {
        #[arg(value_name = "SECONDS")]
        seconds: Option<u64>,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command to execute, defaulting to `browse`
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: None,
            filters: FilterArgs::default(),
        })
    }
}
