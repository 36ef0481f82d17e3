//! Fetch worker: runs catalog requests and normalizes their payloads.
//!
//! The worker is the only code that awaits the network. It owns a shared
//! [`CatalogClient`] and turns each [`FetchRequest`] into exactly one
//! [`FetchResponse`]; errors never escape as `Err`, they become `*Failed`
//! responses for the controllers to collapse into a status.

use crate::catalog::{to_detail, to_summaries, CatalogClient};
use crate::domain::error::Result;
use crate::worker::{FetchRequest, FetchResponse, TraceContext};
use std::sync::Arc;
use tracing::Instrument;

/// Stateless request executor shared by every fetch task of a session.
#[derive(Clone)]
pub struct CatalogWorker {
    client: Arc<dyn CatalogClient>,
}

impl CatalogWorker {
    #[must_use]
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self { client }
    }

    /// Executes one request and reports its outcome.
    ///
    /// The span is parented to the trace context the request was created
    /// under, so the fetch shows up beneath the event that caused it.
    pub async fn handle_message(&self, request: FetchRequest) -> FetchResponse {
        let span = tracing::debug_span!(
            "worker_handle_message",
            seq = request.seq(),
            kind = request_kind(&request)
        );
        Self::link_parent(&span, request.trace_context());

        self.execute(request).instrument(span).await
    }

    async fn execute(&self, request: FetchRequest) -> FetchResponse {
        match request {
            FetchRequest::Search { seq, term, .. } => {
                let outcome = self.search(&term).await;
                Self::handle_result("search", outcome, |cocktails| {
                    tracing::debug!(result_count = cocktails.len(), "search payload normalized");
                    FetchResponse::SearchLoaded {
                        seq,
                        term: term.clone(),
                        cocktails,
                    }
                })
                .unwrap_or_else(|message| FetchResponse::SearchFailed { seq, term, message })
            }
            FetchRequest::Lookup { seq, id, .. } => {
                let outcome = self.client.lookup_by_id(&id).await.map(|raw| to_detail(&raw));
                Self::handle_result("lookup", outcome, |detail| FetchResponse::LookupLoaded {
                    seq,
                    id: id.clone(),
                    detail,
                })
                .unwrap_or_else(|message| FetchResponse::LookupFailed { seq, id, message })
            }
        }
    }

    async fn search(&self, term: &str) -> Result<Vec<crate::domain::CocktailSummary>> {
        let raw = self.client.search_by_name(term).await?;
        to_summaries(&raw)
    }

    /// Logs the outcome and maps success through `on_success`.
    ///
    /// Failures come back as the display message of the error.
    fn handle_result<T, F>(
        operation: &str,
        result: Result<T>,
        on_success: F,
    ) -> std::result::Result<FetchResponse, String>
    where
        F: FnOnce(T) -> FetchResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "catalog request successful");
                Ok(on_success(value))
            }
            Err(e) => {
                tracing::debug!(
                    operation = operation,
                    transport = e.is_transport(),
                    error = %e,
                    "catalog request failed"
                );
                Err(format!("{operation}: {e}"))
            }
        }
    }

    fn link_parent(span: &tracing::Span, trace_context: Option<&TraceContext>) {
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        if let Some(parent) = trace_context.and_then(TraceContext::to_otel_context) {
            span.set_parent(parent);
        }
    }
}

impl std::fmt::Debug for CatalogWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogWorker").finish_non_exhaustive()
    }
}

const fn request_kind(request: &FetchRequest) -> &'static str {
    match request {
        FetchRequest::Search { .. } => "search",
        FetchRequest::Lookup { .. } => "lookup",
    }
}
