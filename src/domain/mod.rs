//! Domain layer for the cocktail catalog client.
//!
//! Holds the strict records every other layer speaks in and the crate-wide error
//! type. Nothing here performs I/O.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`cocktail`]: Summary and detail records plus route helpers

pub mod cocktail;
pub mod error;

pub use cocktail::{CocktailDetail, CocktailSummary};
pub use error::{CatalogError, Result};
