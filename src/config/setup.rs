//! Interactive setup wizard for first-time configuration
//!
//! Prompts for the backend address and the filters a session starts with,
//! then saves the result to the config file.

use super::{RoboSearchConfig, validate_backend_url};
use crate::project::{SortOption, SourceFilter};
use config::ConfigError;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::Path;

fn prompt_error(e: dialoguer::Error) -> ConfigError {
    ConfigError::Message(format!("Failed to read input: {e}"))
}

/// Interactive setup - prompts for backend address, default source and sort
///
/// Starts from `current` so re-running the wizard keeps existing answers as
/// defaults, and writes the answers to `path`.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The backend address is not an http(s) URL
/// - The configuration cannot be saved
pub fn first_time_setup(current: &RoboSearchConfig, path: &Path) -> Result<RoboSearchConfig, ConfigError> {
    println!("Welcome to robosearch! Let's point it at a search backend.\n");
    let theme = ColorfulTheme::default();

    let backend_url: String = Input::with_theme(&theme)
        .with_prompt("Backend URL")
        .default(current.backend_url.clone())
        .validate_with(|input: &String| validate_backend_url(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()
        .map_err(prompt_error)?;

    let sources: Vec<&str> = SourceFilter::ALL.iter().map(|s| s.as_param()).collect();
    let source_idx = Select::with_theme(&theme)
        .with_prompt("Default source")
        .items(&sources)
        .default(position(&SourceFilter::ALL, current.default_source))
        .interact()
        .map_err(prompt_error)?;

    let sorts: Vec<&str> = SortOption::ALL.iter().map(|s| s.label()).collect();
    let sort_idx = Select::with_theme(&theme)
        .with_prompt("Default sort")
        .items(&sorts)
        .default(position(&SortOption::ALL, current.default_sort))
        .interact()
        .map_err(prompt_error)?;

    let mut config = current.clone();
    config.set_backend_url(&backend_url)?;
    config.default_source = SourceFilter::ALL[source_idx];
    config.default_sort = SortOption::ALL[sort_idx];

    config.save_to(path)?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

fn position<T: PartialEq>(all: &[T], value: T) -> usize {
    all.iter().position(|v| *v == value).unwrap_or(0)
}
