//! `SpanExporter` that appends OTLP/JSON batches to a rotating file.

use super::file_writer::{RotatingFile, RotationPolicy};
use super::otlp;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Instrumentation scope recorded on every exported batch.
pub const SCOPE: &str = "cocktaildb";

/// Writes each exported batch as one OTLP/JSON line.
struct FileSpanExporter {
    file: RotatingFile,
    resource: Resource,
    is_shutdown: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = otlp::encode_batch(&self.resource, SCOPE, &batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Builds a tracer provider exporting every finished span to `path`.
///
/// Spans are written synchronously as they end, so nothing is lost if the
/// process exits without flushing.
pub fn file_tracer_provider(
    path: PathBuf,
    policy: RotationPolicy,
    resource: Resource,
) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(path, policy),
        resource: resource.clone(),
        is_shutdown: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_span_is_written_as_one_otlp_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("otlp.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "cocktaildb")]);
        let provider = file_tracer_provider(path.clone(), RotationPolicy::default(), resource);

        provider.tracer(SCOPE).in_span("lookup", |_cx| {});

        let contents = std::fs::read_to_string(&path).unwrap();
        let line = contents.lines().next().unwrap();
        let doc: serde_json::Value = serde_json::from_str(line).unwrap();
        let span = &doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "lookup");
        assert_eq!(span["spanId"].as_str().map(str::len), Some(16));
    }
}
