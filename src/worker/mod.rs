//! Fetch worker executing catalog requests off the event loop.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and payload normalization

pub mod handler;
pub mod messages;

pub use handler::CatalogWorker;
pub use messages::{FetchRequest, FetchResponse, TraceContext};
