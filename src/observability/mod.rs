//! Tracing setup with OTLP/JSON file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider
//!     → FileSpanExporter → otlp::encode_batch → RotatingFile
//! ```
//!
//! Each exported batch is one JSON line in OTLP format, so the file can be
//! replayed into any collector. Files rotate at 10 MB with 3 backups.
//!
//! # Usage
//!
//! ```no_run
//! use cocktaildb::{observability, Config};
//!
//! let _guard = observability::init_tracing(&Config::default())?;
//! tracing::info!("tracing active");
//! # Ok::<(), cocktaildb::CatalogError>(())
//! ```

mod exporter;
mod file_writer;
mod init;
mod otlp;

pub use file_writer::RotationPolicy;
pub use init::{init_tracing, TracingGuard, DEFAULT_LEVEL, DEFAULT_TRACE_FILE};
