//! Request and response types exchanged with the fetch worker.
//!
//! Every request carries the sequence number the issuing controller assigned
//! to it, and every response echoes it back so the controller can tell the live
//! response from a stale one. Requests also carry the caller's trace context so
//! worker spans join the trace that triggered them.

use crate::domain::{CocktailDetail, CocktailSummary};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-task span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry so the fetch
/// task, which runs detached from the event loop span, can link back to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across tasks.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid, which is the case
    /// whenever no OpenTelemetry layer is installed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cocktaildb::worker::TraceContext;
    ///
    /// if let Some(ctx) = TraceContext::from_current() {
    ///     println!("Trace ID: {}", ctx.trace_id);
    /// }
    /// ```
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Rebuilds the remote OpenTelemetry context this trace context describes.
    ///
    /// Returns `None` if either ID is not valid hex.
    pub fn to_otel_context(&self) -> Option<opentelemetry::Context> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::new().with_remote_span_context(span_context))
    }
}

/// Generates constructors that attach the current trace context.
macro_rules! fetch_request_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl FetchRequest {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " request with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

fetch_request_builders! {
    search(Search { seq: u64, term: String }),
    lookup(Lookup { seq: u64, id: String }),
}

/// Fetches the controllers ask the worker to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchRequest {
    /// Search cocktails by name.
    Search {
        seq: u64,
        /// Term exactly as the user typed it.
        term: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Look up one cocktail by identifier.
    Lookup {
        seq: u64,
        id: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl FetchRequest {
    #[must_use]
    pub const fn seq(&self) -> u64 {
        match self {
            Self::Search { seq, .. } | Self::Lookup { seq, .. } => *seq,
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::Search { trace_context, .. } | Self::Lookup { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Outcomes reported back by the worker.
///
/// Failures carry a display message only; the controllers collapse them into
/// a status and never show the raw error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchResponse {
    /// Search finished with a well-formed payload. An empty list means no match.
    SearchLoaded {
        seq: u64,
        term: String,
        cocktails: Vec<CocktailSummary>,
    },

    /// Search failed in transport, decoding or payload shape.
    SearchFailed {
        seq: u64,
        term: String,
        message: String,
    },

    /// Lookup finished. `None` means the catalog has no such record.
    LookupLoaded {
        seq: u64,
        id: String,
        detail: Option<CocktailDetail>,
    },

    /// Lookup failed in transport or decoding.
    LookupFailed {
        seq: u64,
        id: String,
        message: String,
    },
}

impl FetchResponse {
    #[must_use]
    pub const fn seq(&self) -> u64 {
        match self {
            Self::SearchLoaded { seq, .. }
            | Self::SearchFailed { seq, .. }
            | Self::LookupLoaded { seq, .. }
            | Self::LookupFailed { seq, .. } => *seq,
        }
    }
}
