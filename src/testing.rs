//! Testing utilities for robosearch
//!
//! Provides a scripted [`MockBackend`] so controller and client logic can be
//! exercised without a network.
//!
//! Only available when compiled with `cfg(test)`.

use crate::backend::{FetchError, SearchBackend};
use crate::catalog::TaggedEntry;
use crate::project::Project;
use crate::query::SearchRequest;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Backend that replays queued outcomes in order
///
/// Once a queue runs dry every further call succeeds with an empty array.
/// Every search request is recorded for later inspection.
#[derive(Debug, Default)]
pub struct MockBackend {
    searches: RefCell<VecDeque<Result<Vec<Project>, FetchError>>>,
    listings: RefCell<VecDeque<Result<Vec<TaggedEntry>, FetchError>>>,
    search_requests: RefCell<Vec<SearchRequest>>,
    listing_calls: Cell<usize>,
}

impl MockBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next search
    #[must_use]
    pub fn with_search(self, outcome: Result<Vec<Project>, FetchError>) -> Self {
        self.searches.borrow_mut().push_back(outcome);
        self
    }

    /// Queue the outcome of the next unfiltered listing, one tag list per project
    #[must_use]
    pub fn with_listing(self, outcome: Result<Vec<Vec<&str>>, FetchError>) -> Self {
        let outcome = outcome.map(|projects| {
            projects
                .into_iter()
                .map(|tags| TaggedEntry {
                    tags: tags.into_iter().map(str::to_string).collect(),
                })
                .collect()
        });
        self.listings.borrow_mut().push_back(outcome);
        self
    }

    /// Every search request received so far
    #[must_use]
    pub fn search_requests(&self) -> Vec<SearchRequest> {
        self.search_requests.borrow().clone()
    }

    /// Number of unfiltered listings requested so far
    #[must_use]
    pub fn listing_calls(&self) -> usize {
        self.listing_calls.get()
    }
}

impl SearchBackend for MockBackend {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Project>, FetchError> {
        self.search_requests.borrow_mut().push(request.clone());
        self.searches
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn list_all(&self) -> Result<Vec<TaggedEntry>, FetchError> {
        self.listing_calls.set(self.listing_calls.get() + 1);
        self.listings
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
