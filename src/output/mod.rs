//! Output formatting for CLI display
//!
//! Renders a [`ResultView`] as coloured text, JSON, or CSV for the
//! non-interactive commands.

use crate::view::{DisplayMode, LOADING_MESSAGE, NO_RESULTS_MESSAGE, ProjectCard, ResultView};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Output format for `robosearch search`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable cards
    #[default]
    Text,
    /// The backend's project objects as a JSON array
    Json,
    /// One row per project
    Csv,
}

/// Format a project card for display
#[must_use]
pub fn card(card: &ProjectCard<'_>, quiet: bool) -> String {
    if quiet {
        return card.title.to_string();
    }

    let mut out = format!("{}  {}", card.title.bold().blue(), format!("[{}]", card.source).dimmed());
    if !card.description.is_empty() {
        out.push_str("\n  ");
        out.push_str(card.description);
    }
    if !card.url.is_empty() {
        out.push_str(&format!("\n  {}", card.url.underline()));
    }
    if !card.tags.is_empty() {
        let chips: Vec<String> = card.tags.iter().map(|t| tag_chip(t)).collect();
        out.push_str(&format!("\n  {}", chips.join(" ")));
    }
    out
}

/// Format a tag as a chip
#[must_use]
pub fn tag_chip(tag: &str) -> String {
    format!("#{tag}").magenta().to_string()
}

/// Render the whole view as text, one card per block
#[must_use]
pub fn text(view: &ResultView<'_>, quiet: bool) -> String {
    let separator = if quiet { "\n" } else { "\n\n" };
    let render_cards = |view: &ResultView<'_>| {
        view.cards()
            .iter()
            .map(|c| card(c, quiet))
            .collect::<Vec<_>>()
            .join(separator)
    };

    match view.mode() {
        DisplayMode::ErrorBanner { message, retained } => {
            let banner = message.red().bold().to_string();
            if retained.is_empty() {
                banner
            } else {
                format!("{banner}\n\n{}", render_cards(view))
            }
        }
        DisplayMode::Loading => LOADING_MESSAGE.dimmed().to_string(),
        DisplayMode::Empty if quiet => String::new(),
        DisplayMode::Empty => NO_RESULTS_MESSAGE.dimmed().to_string(),
        DisplayMode::List(_) => render_cards(view),
    }
}

/// Write the visible projects as a pretty JSON array
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization or writing fails.
pub fn json<W: Write>(writer: W, view: &ResultView<'_>) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, view.visible())
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: String,
    name: &'a str,
    source: &'a str,
    url: &'a str,
    description: &'a str,
    tags: String,
}

/// Write the visible projects as CSV with a header row
///
/// Tags are joined with `;` inside their column.
///
/// # Errors
///
/// Returns `csv::Error` if serialization or writing fails.
pub fn csv<W: Write>(writer: W, view: &ResultView<'_>) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for project in view.visible() {
        wtr.serialize(CsvRow {
            id: project.id.to_string(),
            name: &project.name,
            source: &project.source,
            url: &project.url,
            description: &project.description,
            tags: project.tags.join(";"),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
