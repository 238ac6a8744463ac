//! Awaiting driver for [`SearchController`]

use super::{Completion, SearchController, SearchTicket, TagTicket};
use crate::backend::SearchBackend;
use crate::query::QueryState;

/// A controller bound to a backend
///
/// Each method issues its request(s) through the controller, awaits the
/// backend, and delivers the outcome. Requests started by one call are
/// always completed by the same call, so results here are never stale; the
/// interactive client uses the controller directly to keep requests
/// overlapping.
pub struct SearchClient<B> {
    backend: B,
    controller: SearchController,
}

impl<B: SearchBackend> SearchClient<B> {
    #[must_use]
    pub fn new(backend: B, state: QueryState) -> Self {
        Self {
            backend,
            controller: SearchController::new(state),
        }
    }

    #[must_use]
    pub const fn controller(&self) -> &SearchController {
        &self.controller
    }

    pub const fn controller_mut(&mut self) -> &mut SearchController {
        &mut self.controller
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Initial load: search and tag catalog fetched concurrently
    pub async fn mount(&mut self) -> (Completion, Completion) {
        let (search, tags) = self.controller.mount();
        let (search_outcome, tags_outcome) = tokio::join!(
            self.backend.search(&search.request),
            self.backend.list_all()
        );
        (
            self.controller.complete_search(search.generation, search_outcome),
            self.controller.complete_tag_fetch(tags.generation, tags_outcome),
        )
    }

    /// Search with the current query state
    pub async fn perform_search(&mut self) -> Completion {
        let ticket = self.controller.begin_search();
        self.run_search(ticket).await
    }

    /// Explicit submit; `None` if a search was already loading
    pub async fn submit(&mut self) -> Option<Completion> {
        let ticket = self.controller.submit()?;
        Some(self.run_search(ticket).await)
    }

    /// Rebuild the tag catalog from the unfiltered listing
    pub async fn fetch_all_tags(&mut self) -> Completion {
        let ticket = self.controller.refresh_tags();
        self.run_tag_fetch(ticket).await
    }

    /// Run a ticket obtained from one of the controller's mutators
    pub async fn run_search(&mut self, ticket: SearchTicket) -> Completion {
        let outcome = self.backend.search(&ticket.request).await;
        self.controller.complete_search(ticket.generation, outcome)
    }

    pub async fn run_tag_fetch(&mut self, ticket: TagTicket) -> Completion {
        let outcome = self.backend.list_all().await;
        self.controller.complete_tag_fetch(ticket.generation, outcome)
    }
}
