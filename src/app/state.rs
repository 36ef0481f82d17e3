//! State snapshots exposed to consumers and the container that owns them.
//!
//! [`SearchState`] and [`DetailState`] are immutable snapshots. Controllers never
//! edit a published snapshot; each transition builds a new value and replaces the
//! old one, so a consumer holding a snapshot never observes a half-applied update.
//!
//! [`AppState`] bundles both controllers. It is the single mutable thing in the
//! fetch layer and is only ever touched by the event handler.

use super::detail::DetailController;
use super::search::SearchController;
use super::status::{DetailStatus, SearchStatus};
use crate::domain::{CocktailDetail, CocktailSummary};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Snapshot of the search list.
///
/// `results` is non-empty only when `status` is [`SearchStatus::Success`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchState {
    /// Term the snapshot belongs to. Always the last term the user set.
    pub term: String,
    pub status: SearchStatus,
    pub results: Vec<CocktailSummary>,
}

impl SearchState {
    pub(crate) fn loading(term: String) -> Self {
        Self {
            term,
            status: SearchStatus::Loading,
            results: Vec::new(),
        }
    }

    pub(crate) fn settled(term: String, results: Vec<CocktailSummary>) -> Self {
        let status = if results.is_empty() {
            SearchStatus::Empty
        } else {
            SearchStatus::Success
        };
        Self {
            term,
            status,
            results,
        }
    }

    pub(crate) fn failed(term: String) -> Self {
        Self {
            term,
            status: SearchStatus::Error,
            results: Vec::new(),
        }
    }
}

/// Snapshot of the detail view for one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetailState {
    /// Route identifier the snapshot belongs to.
    pub identifier: String,
    pub status: DetailStatus,
    /// Present only when `status` is [`DetailStatus::Found`].
    pub detail: Option<CocktailDetail>,
}

impl DetailState {
    pub(crate) fn loading(identifier: String) -> Self {
        Self {
            identifier,
            status: DetailStatus::Loading,
            detail: None,
        }
    }

    pub(crate) fn settled(identifier: String, detail: Option<CocktailDetail>) -> Self {
        let status = if detail.is_some() {
            DetailStatus::Found
        } else {
            DetailStatus::NotFound
        };
        Self {
            identifier,
            status,
            detail,
        }
    }
}

/// Owner of both controllers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub search: SearchController,
    pub detail: DetailController,
}

impl AppState {
    /// Creates a state container whose search controller waits `debounce`
    /// after the last term change before fetching.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cocktaildb::app::{AppState, SearchStatus};
    /// use std::time::Duration;
    ///
    /// let state = AppState::new(Duration::from_millis(300));
    /// assert_eq!(state.search.state().status, SearchStatus::Idle);
    /// ```
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            search: SearchController::new(debounce),
            detail: DetailController::new(),
        }
    }
}
