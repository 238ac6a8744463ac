//! Config command - inspect and change the configuration file

use crate::{RoboSearchError, cli::ConfigCommands, config::RoboSearchConfig};
use ::config::ConfigError;
use std::path::Path;

type Result<T> = std::result::Result<T, RoboSearchError>;

/// Execute a configuration subcommand against the file at `path`
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, validated, or saved
pub fn execute(path: &Path, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            println!("{}", path.display());
            return Ok(());
        }
        ConfigCommands::Init => {
            let current = RoboSearchConfig::load_from(path)?;
            let _ = crate::config::first_time_setup(&current, path)?;
            return Ok(());
        }
        _ => {}
    }

    let mut config = RoboSearchConfig::load_from(path)?;
    let message = match command {
        ConfigCommands::Show => {
            print!("{}", show(&config)?);
            return Ok(());
        }
        ConfigCommands::SetBackend { url } => {
            config.set_backend_url(url)?;
            format!("Backend set to {}", config.backend_url)
        }
        ConfigCommands::SetSource { source } => {
            config.default_source = *source;
            format!("Default source set to {source}")
        }
        ConfigCommands::SetSort { sort } => {
            config.default_sort = *sort;
            format!("Default sort set to {}", sort.label())
        }
        ConfigCommands::SetTimeout { seconds } => {
            config.request_timeout_secs = *seconds;
            seconds.map_or_else(
                || "Request timeout disabled".to_string(),
                |s| format!("Request timeout set to {s}s"),
            )
        }
        ConfigCommands::Path | ConfigCommands::Init => unreachable!(),
    };

    config.save_to(path)?;
    if !quiet {
        println!("{message}");
    }
    Ok(())
}

fn show(config: &RoboSearchConfig) -> Result<String> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{SortOption, SourceFilter};
    use tempfile::TempDir;

    #[test]
    fn test_set_commands_persist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        execute(&path, &ConfigCommands::SetSort { sort: SortOption::Growth }, true).unwrap();
        execute(&path, &ConfigCommands::SetSource { source: SourceFilter::GitHub }, true).unwrap();
        execute(&path, &ConfigCommands::SetTimeout { seconds: Some(10) }, true).unwrap();
        execute(
            &path,
            &ConfigCommands::SetBackend { url: "http://localhost:5000/".into() },
            true,
        )
        .unwrap();

        let config = RoboSearchConfig::load_from(&path).unwrap();
        assert_eq!(config.default_sort, SortOption::Growth);
        assert_eq!(config.default_source, SourceFilter::GitHub);
        assert_eq!(config.request_timeout_secs, Some(10));
        assert_eq!(config.backend_url, "http://localhost:5000");
    }

    #[test]
    fn test_invalid_backend_not_saved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let result = execute(&path, &ConfigCommands::SetBackend { url: "nope".into() }, true);

        assert!(matches!(result, Err(RoboSearchError::Config(_))));
        let config = RoboSearchConfig::load_from(&path).unwrap();
        assert_eq!(config, RoboSearchConfig::default());
    }

    #[test]
    fn test_show_lists_fields() {
        let shown = show(&RoboSearchConfig::default()).unwrap();
        assert!(shown.contains("backend_url"));
        assert!(shown.contains("default_sort = \"stars\""));
        assert!(shown.contains("default_source = \"All\""));
    }

    #[test]
    fn test_show_command_reads_saved_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        execute(&path, &ConfigCommands::SetSort { sort: SortOption::GrowthMonth }, true).unwrap();

        assert!(execute(&path, &ConfigCommands::Show, true).is_ok());
        let shown = show(&RoboSearchConfig::load_from(&path).unwrap()).unwrap();
        assert!(shown.contains("default_sort = \"growth_month\""));
    }
}
