//! Lifecycle status enums for the two controllers.
//!
//! # State Machines
//!
//! Search:
//!
//! ```text
//! Idle ──term──▶ Loading ──response──▶ Success | Empty
//!                   │  ▲
//!                   │  └── term (restarts debounce, invalidates in-flight fetch)
//!                   └──failure──▶ Error
//! ```
//!
//! Detail:
//!
//! ```text
//! Loading ──detail──▶ Found
//!    └──── none / failure ──▶ NotFound
//! ```

use serde::{Deserialize, Serialize};

/// Where the search list is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchStatus {
    /// No term has been submitted yet.
    #[default]
    Idle,

    /// A term is waiting for its debounce window or its response.
    Loading,

    /// The latest request returned at least one cocktail.
    Success,

    /// The latest request completed with zero cocktails.
    Empty,

    /// The latest request failed in transport or returned an unusable payload.
    Error,
}

impl SearchStatus {
    /// Returns `true` for statuses that only a new term can leave.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Empty | Self::Error)
    }
}

/// Where the detail view is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DetailStatus {
    /// A lookup for the current identifier is in flight.
    Loading,

    /// The lookup returned a record.
    Found,

    /// Nothing to show: unknown identifier, failed request, or no identifier yet.
    #[default]
    NotFound,
}

impl DetailStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::NotFound)
    }
}
