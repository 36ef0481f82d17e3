//! Remote catalog client abstraction.
//!
//! The [`CatalogClient`] trait is the seam between the fetch layer and the
//! network. The session only ever talks to a `dyn CatalogClient`, which lets tests
//! inject a scripted stub and keeps the HTTP details in [`super::http`].

use crate::catalog::payload::RawPayload;
use crate::domain::error::Result;
use async_trait::async_trait;

/// Read-only access to the remote cocktail catalog.
///
/// Both operations resolve to the raw JSON body for any HTTP response the
/// service sends back, including error statuses. They fail only when no
/// response arrived or the body was not JSON. Implementations must not retry.
///
/// # Implementations
///
/// - [`HttpCatalog`](super::HttpCatalog): `reqwest`-backed client (default)
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Searches cocktails whose name matches `term`.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request never got a response, or a
    /// decode error if the body was not JSON.
    async fn search_by_name(&self, term: &str) -> Result<RawPayload>;

    /// Looks up a single cocktail by its catalog identifier.
    ///
    /// An unknown identifier is not an error; the payload simply carries
    /// `drinks: null`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`CatalogClient::search_by_name`].
    async fn lookup_by_id(&self, id: &str) -> Result<RawPayload>;
}
