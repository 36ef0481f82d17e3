//! Error types for the cocktail catalog client.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] used throughout the crate. Errors never reach presentation consumers
//! directly: the controllers fold every failure into a state value and only log the
//! underlying error.

use thiserror::Error;

/// The main error type for catalog operations.
///
/// Variants follow the failure taxonomy of the fetch layer: transport failures
/// and undecodable bodies come from the remote client, malformed payloads from
/// the normalizer, and the rest from configuration and runtime plumbing.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No HTTP response reached the client (DNS, connect, TLS, reset).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but its body was not JSON.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body was JSON but not in the `{"drinks": [...] | null}` shape.
    ///
    /// The string describes which part of the payload was unexpected.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The session event loop has stopped and can no longer accept input.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CatalogError {
    /// Returns `true` when no response reached the client at all.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
