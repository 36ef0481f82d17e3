//! `reqwest`-backed catalog client.
//!
//! Issues a single GET per call against the configured base URL. Query values
//! are URL-encoded by `reqwest`. Non-2xx responses are logged and still parsed,
//! since the catalog reports "no data" in the body rather than via status codes.

use crate::catalog::client::CatalogClient;
use crate::catalog::payload::RawPayload;
use crate::domain::error::Result;
use async_trait::async_trait;

/// Public endpoint of the free catalog tier.
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

const SEARCH_PATH: &str = "search.php";
const LOOKUP_PATH: &str = "lookup.php";

/// HTTP client for the remote catalog.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Creates a client rooted at `base_url`. A trailing slash is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use cocktaildb::catalog::HttpCatalog;
    ///
    /// let catalog = HttpCatalog::new("http://localhost:8080/api/");
    /// assert_eq!(catalog.base_url(), "http://localhost:8080/api");
    /// ```
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(level = "debug", skip(self), fields(base_url = %self.base_url))]
    async fn get(&self, path: &str, param: &str, value: &str) -> Result<RawPayload> {
        let url = format!("{}/{path}", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[(param, value)])
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, url = %url, "catalog request failed"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, url = %url, "catalog answered with non-success status");
        }

        let body = response.text().await?;
        let payload = RawPayload::from_body(&body)
            .inspect_err(|e| tracing::warn!(error = %e, status = %status, "catalog body is not JSON"))?;

        tracing::debug!(status = %status, body_len = body.len(), "catalog response parsed");
        Ok(payload)
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalog {
    async fn search_by_name(&self, term: &str) -> Result<RawPayload> {
        self.get(SEARCH_PATH, "s", term).await
    }

    async fn lookup_by_id(&self, id: &str) -> Result<RawPayload> {
        self.get(LOOKUP_PATH, "i", id).await
    }
}
