//! HTTP implementation of [`SearchBackend`] on top of reqwest

use super::{FetchError, SEARCH_PATH, SearchBackend};
use crate::catalog::TaggedEntry;
use crate::project::Project;
use crate::query::SearchRequest;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Backend reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend for the given base address without a request timeout
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_timeout(base_url, None)
    }

    /// Create a backend whose requests fail after `timeout`
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the HTTP client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base address with trailing slashes removed
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the search endpoint
    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}{SEARCH_PATH}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, FetchError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), %status, "backend responded");

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl SearchBackend for HttpBackend {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Project>, FetchError> {
        debug!(
            query = %request.query,
            source = %request.source,
            tags = %request.tags,
            sort = %request.sort,
            "searching"
        );
        self.get_json(self.client.get(self.search_url()).query(request))
            .await
    }

    async fn list_all(&self) -> Result<Vec<TaggedEntry>, FetchError> {
        debug!("listing all projects for tag catalog");
        self.get_json(self.client.get(self.search_url())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let backend = HttpBackend::new("http://localhost:8000///").unwrap();
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(backend.search_url(), "http://localhost:8000/api/search");
    }

    #[test]
    fn test_with_timeout_builds() {
        let backend =
            HttpBackend::with_timeout("http://localhost", Some(Duration::from_secs(3))).unwrap();
        assert_eq!(backend.search_url(), "http://localhost/api/search");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) on loopback is not expected to accept HTTP
        let backend =
            HttpBackend::with_timeout("http://127.0.0.1:9", Some(Duration::from_secs(2))).unwrap();
        let result = backend.list_all().await;

        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
