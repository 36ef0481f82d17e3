//! Remote catalog access and response normalization.
//!
//! # Modules
//!
//! - `client`: [`CatalogClient`] trait, the network seam
//! - `http`: [`HttpCatalog`], the `reqwest` implementation
//! - `payload`: [`RawPayload`], the untyped response body
//! - `normalize`: pure conversion of payloads into domain records

pub mod client;
pub mod http;
pub mod normalize;
pub mod payload;

pub use client::CatalogClient;
pub use http::{HttpCatalog, DEFAULT_BASE_URL};
pub use normalize::{to_detail, to_summaries};
pub use payload::RawPayload;
