//! Query state and request serialization
//!
//! `QueryState` holds the four search parameters a user can change. Each
//! mutator returns a [`Trigger`] telling the caller whether the change must
//! re-issue the search: filter changes do, free-text edits do not (the query
//! only takes effect when the user submits).

use crate::project::{SortOption, SourceFilter};
use serde::Serialize;

/// Whether a state change requires a new search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Trigger {
    /// Nothing to re-fetch
    None,
    /// The search must be re-issued with the new state
    Search,
}

impl Trigger {
    #[must_use]
    pub const fn needs_search(self) -> bool {
        matches!(self, Self::Search)
    }
}

/// Current search parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    query: String,
    source: SourceFilter,
    /// Selected tags in the order they were selected
    tags: Vec<String>,
    sort: SortOption,
}

impl QueryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the given source and sort instead of the defaults
    #[must_use]
    pub fn with_filters(source: SourceFilter, sort: SortOption) -> Self {
        Self {
            source,
            sort,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn source(&self) -> SourceFilter {
        self.source
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub const fn sort(&self) -> SortOption {
        self.sort
    }

    #[must_use]
    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Replace the free-text query; takes effect on the next submit
    pub fn set_query(&mut self, query: impl Into<String>) -> Trigger {
        self.query = query.into();
        Trigger::None
    }

    /// Mutable access to the query text for in-place editing
    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    /// Select a source; re-selecting the current one is a no-op
    pub fn set_source(&mut self, source: SourceFilter) -> Trigger {
        if self.source == source {
            return Trigger::None;
        }
        self.source = source;
        Trigger::Search
    }

    /// Select a sort option; re-selecting the current one is a no-op
    pub fn set_sort(&mut self, sort: SortOption) -> Trigger {
        if self.sort == sort {
            return Trigger::None;
        }
        self.sort = sort;
        Trigger::Search
    }

    /// Add the tag if absent, remove it if present
    pub fn toggle_tag(&mut self, tag: &str) -> Trigger {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
        Trigger::Search
    }

    /// Deselect every tag
    pub fn clear_tags(&mut self) -> Trigger {
        if self.tags.is_empty() {
            return Trigger::None;
        }
        self.tags.clear();
        Trigger::Search
    }

    /// Snapshot the state as the request sent to the backend
    #[must_use]
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            query: self.query.clone(),
            source: self.source.as_param().to_string(),
            tags: self.tags.join(","),
            sort: self.sort.as_param().to_string(),
        }
    }
}

/// Query parameters of a search request, in wire order
///
/// Tags are joined with commas without escaping, so a tag containing a comma
/// is indistinguishable from two tags on the backend side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub source: String,
    pub tags: String,
    pub sort: String,
}
