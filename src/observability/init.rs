//! Subscriber installation.

use super::exporter::{self, SCOPE};
use super::file_writer::RotationPolicy;
use crate::domain::error::Result;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default trace level when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LEVEL: &str = "info";

/// File name used under the data directory when no trace file is configured.
pub const DEFAULT_TRACE_FILE: &str = "cocktaildb-otlp.json";

/// Keeps the tracer provider alive and shuts it down on drop.
#[derive(Debug)]
pub struct TracingGuard {
    provider: TracerProvider,
    trace_file: PathBuf,
}

impl TracingGuard {
    /// File spans are being written to.
    #[must_use]
    pub fn trace_file(&self) -> &std::path::Path {
        &self.trace_file
    }
}

impl Drop for TracingGuard {
    fn drop(&mut self) {
        let _ = self.provider.shutdown();
    }
}

/// Installs the global subscriber: an `EnvFilter` feeding an OpenTelemetry
/// layer that exports to a rotating OTLP/JSON file.
///
/// The filter comes from `RUST_LOG` if set, then `config.trace_level`, then
/// [`DEFAULT_LEVEL`]. The file is `config.trace_file` or
/// [`DEFAULT_TRACE_FILE`] under [`paths::data_dir`]; its directory is created.
///
/// Calling this when a global subscriber already exists leaves the existing
/// one in place.
///
/// # Errors
///
/// Returns [`CatalogError::Io`](crate::CatalogError::Io) if the trace
/// directory cannot be created.
pub fn init_tracing(config: &Config) -> Result<TracingGuard> {
    let trace_file = config
        .trace_file
        .clone()
        .unwrap_or_else(|| paths::data_dir().join(DEFAULT_TRACE_FILE));
    if let Some(dir) = trace_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", "cocktaildb"),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider =
        exporter::file_tracer_provider(trace_file.clone(), RotationPolicy::default(), resource);

    let subscriber = tracing_subscriber::registry()
        .with(filter(config.trace_level.as_deref()))
        .with(OpenTelemetryLayer::new(provider.tracer(SCOPE)));

    if subscriber.try_init().is_err() {
        tracing::debug!("global subscriber already installed");
    }

    Ok(TracingGuard {
        provider,
        trace_file,
    })
}

fn filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}
