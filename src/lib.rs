//! Robosearch - a terminal client for a robotics project search service
//!
//! This library holds the client-side state of a search session (query text,
//! source filter, selected tags, sort order), turns it into requests against
//! the backend's `/api/search` endpoint, and projects the responses into a
//! result list and a tag catalog that front ends can render.

use thiserror::Error;

pub mod backend;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod logging;
pub mod output;
pub mod project;
pub mod query;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum RoboSearchError {
    /// The backend could not be reached or answered badly
    #[error("Backend error: {0}")]
    Fetch(#[from] backend::FetchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A request completed but the backend reported failure
    #[error("{0}")]
    RequestFailed(String),
}
