//! Search command - one request, printed and done

use crate::{
    RoboSearchError,
    backend::SearchBackend,
    controller::SearchClient,
    output::{self, OutputFormat},
    query::QueryState,
};
use std::io::{self, Write};

type Result<T> = std::result::Result<T, RoboSearchError>;

/// Execute a single search and print the outcome in `format`
///
/// On failure the error banner is printed (with any results, of which a
/// one-shot search has none) and the command fails.
///
/// # Errors
/// Returns an error if the search fails or the output cannot be written
pub async fn execute<B: SearchBackend>(
    backend: B,
    state: QueryState,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut client = SearchClient::new(backend, state);
    let _ = client.perform_search().await;

    let controller = client.controller();
    if let Some(message) = controller.search_status().error_message() {
        return Err(RoboSearchError::RequestFailed(message.to_string()));
    }

    let view = controller.view();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            let rendered = output::text(&view, quiet);
            if !rendered.is_empty() {
                writeln!(out, "{rendered}")?;
            }
        }
        OutputFormat::Json => {
            output::json(&mut out, &view)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => output::csv(&mut out, &view)?,
    }
    Ok(())
}
