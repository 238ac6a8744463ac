//! Request lifecycle controller
//!
//! [`SearchController`] is a synchronous state machine over request
//! lifecycle: it owns the query state, the last committed results, the tag
//! catalog, and one [`RequestStatus`] slot per kind of request. It never
//! performs I/O itself. Callers take a ticket from a `begin_*` method, run the
//! request however they like, and feed the outcome back with the matching
//! `complete_*` method.
//!
//! Every ticket carries a [`Generation`]. Only the outcome of the most
//! recently issued request of each kind is applied; anything older is
//! discarded on arrival, so a slow response can never overwrite the results of
//! a newer filter state.
//!
//! [`SearchClient`] pairs a controller with a [`SearchBackend`](crate::backend::SearchBackend)
//! for callers that simply want to await each request.

mod client;

pub use client::SearchClient;

use crate::backend::FetchError;
use crate::catalog::{TagCatalog, TaggedEntry};
use crate::project::{Project, SortOption, SourceFilter};
use crate::query::{QueryState, SearchRequest, Trigger};
use crate::view::ResultView;
use std::fmt;
use tracing::{debug, warn};

/// Message shown when a search fails, whatever the cause
pub const SEARCH_FAILED_MESSAGE: &str =
    "Search failed. Check that the backend service is running and its API key is valid.";

/// Message shown when the tag catalog cannot be loaded
pub const TAGS_FAILED_MESSAGE: &str = "Unable to load tags, please retry.";

/// Lifecycle state of one kind of request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// No request in flight and the last one (if any) succeeded
    #[default]
    Idle,
    /// A request has been issued and not yet resolved
    Loading,
    /// The last resolved request failed
    Error(String),
}

impl RequestStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonic request counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An issued search waiting for its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: Generation,
    pub request: SearchRequest,
}

/// An issued tag catalog fetch waiting for its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagTicket {
    pub generation: Generation,
}

/// What happened to a delivered outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome was committed to state
    Applied,
    /// A newer request had been issued; the outcome was dropped
    Discarded,
}

/// Orchestrates searches and tag fetches over a [`QueryState`]
#[derive(Debug, Default)]
pub struct SearchController {
    state: QueryState,
    results: Vec<Project>,
    search_status: RequestStatus,
    catalog: TagCatalog,
    tag_status: RequestStatus,
    latest_search: Generation,
    latest_tags: Generation,
}

impl SearchController {
    #[must_use]
    pub fn new(state: QueryState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState {
        &self.state
    }

    /// Results of the last applied successful search
    #[must_use]
    pub fn results(&self) -> &[Project] {
        &self.results
    }

    #[must_use]
    pub const fn search_status(&self) -> &RequestStatus {
        &self.search_status
    }

    #[must_use]
    pub const fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn tag_status(&self) -> &RequestStatus {
        &self.tag_status
    }

    /// Whether an explicit submit would be accepted
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        !self.search_status.is_loading()
    }

    /// Projection of results and search status for display
    #[must_use]
    pub fn view(&self) -> ResultView<'_> {
        ResultView::new(&self.results, &self.search_status)
    }

    /// Initial requests: one search and one tag catalog fetch
    pub fn mount(&mut self) -> (SearchTicket, TagTicket) {
        (self.begin_search(), self.begin_tag_fetch())
    }

    /// Edit the free-text query; never issues a request
    pub fn set_query(&mut self, query: impl Into<String>) {
        let _ = self.state.set_query(query);
    }

    /// Mutable access to the query text for in-place editing
    pub fn query_mut(&mut self) -> &mut String {
        self.state.query_mut()
    }

    /// Select a source, re-searching if it changed
    pub fn set_source(&mut self, source: SourceFilter) -> Option<SearchTicket> {
        let trigger = self.state.set_source(source);
        self.react(trigger)
    }

    /// Select a sort option, re-searching if it changed
    pub fn set_sort(&mut self, sort: SortOption) -> Option<SearchTicket> {
        let trigger = self.state.set_sort(sort);
        self.react(trigger)
    }

    /// Toggle a tag and re-search
    pub fn toggle_tag(&mut self, tag: &str) -> Option<SearchTicket> {
        let trigger = self.state.toggle_tag(tag);
        self.react(trigger)
    }

    /// Deselect all tags, re-searching if any were selected
    pub fn clear_tags(&mut self) -> Option<SearchTicket> {
        let trigger = self.state.clear_tags();
        self.react(trigger)
    }

    /// Explicit submit; ignored while a search is loading
    pub fn submit(&mut self) -> Option<SearchTicket> {
        if !self.can_submit() {
            debug!("submit ignored while a search is in flight");
            return None;
        }
        Some(self.begin_search())
    }

    /// Manual tag catalog refresh
    pub fn refresh_tags(&mut self) -> TagTicket {
        self.begin_tag_fetch()
    }

    fn react(&mut self, trigger: Trigger) -> Option<SearchTicket> {
        trigger.needs_search().then(|| self.begin_search())
    }

    /// Issue a search for the current state and mark the search as loading
    pub fn begin_search(&mut self) -> SearchTicket {
        self.latest_search = self.latest_search.next();
        self.search_status = RequestStatus::Loading;
        let ticket = SearchTicket {
            generation: self.latest_search,
            request: self.state.to_request(),
        };
        debug!(generation = %ticket.generation, "search issued");
        ticket
    }

    /// Deliver the outcome of a search
    ///
    /// Success replaces the results verbatim; failure sets the error status
    /// and keeps the previous results visible. Outcomes of superseded
    /// searches are discarded.
    pub fn complete_search(
        &mut self,
        generation: Generation,
        outcome: Result<Vec<Project>, FetchError>,
    ) -> Completion {
        if generation != self.latest_search {
            debug!(%generation, latest = %self.latest_search, "stale search response discarded");
            return Completion::Discarded;
        }

        match outcome {
            Ok(projects) => {
                debug!(%generation, count = projects.len(), "search results applied");
                self.results = projects;
                self.search_status = RequestStatus::Idle;
            }
            Err(error) => {
                warn!(%generation, %error, "search failed");
                self.search_status = RequestStatus::Error(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
        Completion::Applied
    }

    /// Issue a tag catalog fetch and mark it as loading
    pub fn begin_tag_fetch(&mut self) -> TagTicket {
        self.latest_tags = self.latest_tags.next();
        self.tag_status = RequestStatus::Loading;
        debug!(generation = %self.latest_tags, "tag fetch issued");
        TagTicket {
            generation: self.latest_tags,
        }
    }

    /// Deliver the outcome of a tag catalog fetch
    ///
    /// Failure keeps the previously loaded catalog.
    pub fn complete_tag_fetch(
        &mut self,
        generation: Generation,
        outcome: Result<Vec<TaggedEntry>, FetchError>,
    ) -> Completion {
        if generation != self.latest_tags {
            debug!(%generation, latest = %self.latest_tags, "stale tag response discarded");
            return Completion::Discarded;
        }

        match outcome {
            Ok(entries) => {
                self.catalog = TagCatalog::from_entries(&entries);
                debug!(%generation, tags = self.catalog.len(), "tag catalog applied");
                self.tag_status = RequestStatus::Idle;
            }
            Err(error) => {
                warn!(%generation, %error, "failed to fetch tags");
                self.tag_status = RequestStatus::Error(TAGS_FAILED_MESSAGE.to_string());
            }
        }
        Completion::Applied
    }
}
