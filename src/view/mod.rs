//! Result view projection
//!
//! A [`ResultView`] owns nothing: it borrows the committed results and the
//! search status and decides which one of the display modes applies. Every
//! front end (terminal UI, text, JSON, CSV) renders from this projection.

use crate::controller::RequestStatus;
use crate::project::Project;

/// Shown instead of the list when a search succeeds with no projects
pub const NO_RESULTS_MESSAGE: &str = "No matching projects found.";

/// Shown while a search is in flight
pub const LOADING_MESSAGE: &str = "Searching...";

/// The one display mode that applies to the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode<'a> {
    /// The last search failed; earlier results stay visible under the banner
    ErrorBanner {
        message: &'a str,
        retained: &'a [Project],
    },
    /// A search is in flight; the list is hidden
    Loading,
    /// The last search succeeded with no projects
    Empty,
    /// The last search succeeded with projects, in server order
    List(&'a [Project]),
}

/// Display fields of one project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCard<'a> {
    pub title: &'a str,
    pub source: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
    pub url: &'a str,
}

impl<'a> From<&'a Project> for ProjectCard<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            title: &project.name,
            source: &project.source,
            description: &project.description,
            tags: &project.tags,
            url: &project.url,
        }
    }
}

/// Projection of results and search status
#[derive(Debug, Clone, Copy)]
pub struct ResultView<'a> {
    results: &'a [Project],
    status: &'a RequestStatus,
}

impl<'a> ResultView<'a> {
    #[must_use]
    pub const fn new(results: &'a [Project], status: &'a RequestStatus) -> Self {
        Self { results, status }
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode<'a> {
        match self.status {
            RequestStatus::Error(message) => DisplayMode::ErrorBanner {
                message,
                retained: self.results,
            },
            RequestStatus::Loading => DisplayMode::Loading,
            RequestStatus::Idle if self.results.is_empty() => DisplayMode::Empty,
            RequestStatus::Idle => DisplayMode::List(self.results),
        }
    }

    /// Projects currently visible, empty while loading
    #[must_use]
    pub fn visible(&self) -> &'a [Project] {
        match self.mode() {
            DisplayMode::ErrorBanner { retained, .. } => retained,
            DisplayMode::List(projects) => projects,
            DisplayMode::Loading | DisplayMode::Empty => &[],
        }
    }

    /// Cards for the visible projects
    #[must_use]
    pub fn cards(&self) -> Vec<ProjectCard<'a>> {
        self.visible().iter().map(ProjectCard::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Project> {
        vec![
            Project::new(1, "ros2-nav")
                .with_source("GitHub")
                .with_description("Navigation stack")
                .with_url("https://github.com/example/ros2-nav")
                .with_tags(["ros2"]),
            Project::new(2, "arm-policy").with_source("Hugging Face"),
        ]
    }

    #[test]
    fn test_idle_with_results_is_list() {
        let results = sample();
        let status = RequestStatus::Idle;
        let view = ResultView::new(&results, &status);

        assert_eq!(view.mode(), DisplayMode::List(&results));
        let cards = view.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "ros2-nav");
        assert_eq!(cards[0].source, "GitHub");
        assert_eq!(cards[0].description, "Navigation stack");
        assert_eq!(cards[0].tags, ["ros2"]);
        assert_eq!(cards[1].source, "Hugging Face");
    }

    #[test]
    fn test_idle_without_results_is_empty() {
        let status = RequestStatus::Idle;
        let view = ResultView::new(&[], &status);

        assert_eq!(view.mode(), DisplayMode::Empty);
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_loading_hides_list() {
        let results = sample();
        let status = RequestStatus::Loading;
        let view = ResultView::new(&results, &status);

        assert_eq!(view.mode(), DisplayMode::Loading);
        assert!(view.visible().is_empty());
    }

    #[test]
    fn test_error_keeps_retained_results() {
        let results = sample();
        let status = RequestStatus::Error("boom".to_string());
        let view = ResultView::new(&results, &status);

        assert_eq!(
            view.mode(),
            DisplayMode::ErrorBanner {
                message: "boom",
                retained: &results
            }
        );
        assert_eq!(view.cards().len(), 2);
    }
}
