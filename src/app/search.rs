//! Search state controller.
//!
//! Owns the search term and the list-fetch lifecycle. The controller itself is a
//! synchronous state machine: it never sleeps or performs I/O. It emits
//! [`Action`]s asking the runtime to arm a debounce timer or dispatch a fetch, and
//! it is told when those complete.
//!
//! # Ordering
//!
//! Two counters keep the visible state tied to the last term the user set:
//!
//! - `generation` increments on every term change. A debounce timer carries the
//!   generation it was armed for; an elapsed timer from an older generation is
//!   ignored, so only the last term of a burst is ever fetched.
//! - `seq` increments on every dispatched fetch. Only the response whose `seq`
//!   matches the live request may touch state; everything else is discarded on
//!   arrival. In-flight requests are never aborted.

use super::actions::Action;
use super::state::SearchState;
use crate::domain::CocktailSummary;
use crate::worker::FetchRequest;
use std::time::Duration;

/// Default quiet interval between the last keystroke and the fetch.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct SearchController {
    state: SearchState,
    debounce: Duration,
    generation: u64,
    seq: u64,
    live_seq: Option<u64>,
}

impl SearchController {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            state: SearchState::default(),
            debounce,
            generation: 0,
            seq: 0,
            live_seq: None,
        }
    }

    /// Current snapshot.
    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Sequence number of the request allowed to update state, if any.
    #[must_use]
    pub const fn live_seq(&self) -> Option<u64> {
        self.live_seq
    }

    /// Accepts a new term.
    ///
    /// The snapshot switches to `Loading` for the new term right away and any
    /// in-flight request stops being live. Returns the debounce timer to arm, or
    /// `None` if the term is the one already shown.
    ///
    /// Empty and whitespace-only terms are valid searches.
    pub fn set_term(&mut self, term: &str) -> Option<Action> {
        if self.state.term == term && self.state.status != super::SearchStatus::Idle {
            tracing::trace!(term = %term, "search term unchanged");
            return None;
        }

        self.generation += 1;
        if let Some(stale) = self.live_seq.take() {
            tracing::debug!(stale_seq = stale, "term changed while loading, in-flight search invalidated");
        }
        self.state = SearchState::loading(term.to_string());

        tracing::debug!(term = %term, generation = self.generation, "search term changed");

        Some(Action::ScheduleDebounce {
            generation: self.generation,
            delay: self.debounce,
        })
    }

    /// Handles an elapsed debounce timer.
    ///
    /// Returns the fetch to dispatch if the timer belongs to the latest term
    /// change, `None` if a newer change superseded it.
    pub fn debounce_elapsed(&mut self, generation: u64) -> Option<Action> {
        if generation != self.generation {
            tracing::trace!(
                generation = generation,
                current = self.generation,
                "superseded debounce timer ignored"
            );
            return None;
        }

        self.seq += 1;
        self.live_seq = Some(self.seq);

        tracing::debug!(term = %self.state.term, seq = self.seq, "dispatching search");

        Some(Action::Dispatch(FetchRequest::search(
            self.seq,
            self.state.term.clone(),
        )))
    }

    /// Applies a successful response. Returns `true` if the snapshot changed.
    pub fn search_loaded(&mut self, seq: u64, results: Vec<CocktailSummary>) -> bool {
        if !self.accept(seq) {
            return false;
        }

        tracing::debug!(
            term = %self.state.term,
            result_count = results.len(),
            "search settled"
        );
        self.state = SearchState::settled(self.state.term.clone(), results);
        true
    }

    /// Applies a failed response. Returns `true` if the snapshot changed.
    pub fn search_failed(&mut self, seq: u64, message: &str) -> bool {
        if !self.accept(seq) {
            return false;
        }

        tracing::warn!(term = %self.state.term, error = %message, "search failed");
        self.state = SearchState::failed(self.state.term.clone());
        true
    }

    fn accept(&mut self, seq: u64) -> bool {
        if self.live_seq == Some(seq) {
            self.live_seq = None;
            true
        } else {
            tracing::debug!(seq = seq, live_seq = ?self.live_seq, "stale search response discarded");
            false
        }
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
