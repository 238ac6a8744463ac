//! Search backend abstraction
//!
//! The backend exposes a single endpoint, `GET /api/search`, used two ways:
//! with `query`/`source`/`tags`/`sort` parameters for a filtered search, and
//! without parameters to list everything (the source of the tag vocabulary).
//!
//! [`SearchBackend`] is the seam between the request controller and the
//! network so the controller can be driven by a scripted backend in tests.

mod error;
mod http;

pub use error::FetchError;
pub use http::HttpBackend;

use crate::catalog::TaggedEntry;
use crate::project::Project;
use crate::query::SearchRequest;
use std::future::Future;

/// Default backend address
pub const DEFAULT_BACKEND_URL: &str = "https://robot-search-backend.onrender.com";

/// Path of the search endpoint relative to the backend base address
pub const SEARCH_PATH: &str = "/api/search";

/// Trait for search backend implementations
pub trait SearchBackend {
    /// Run a filtered search; the returned order is the display order
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on transport failure, non-success status, or a
    /// body that is not a JSON array of projects.
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<Vec<Project>, FetchError>>;

    /// List every project without filters (only the tags are decoded)
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on transport failure, non-success status, or a
    /// body that is not a JSON array of objects with a `tags` field.
    fn list_all(&self) -> impl Future<Output = Result<Vec<TaggedEntry>, FetchError>>;
}
