//! Detail state controller.
//!
//! Owns the single-cocktail lookup for the identifier taken from the current
//! route. A lookup starts once per distinct identifier, with no debounce. A
//! missing record, a failed request and an unusable payload all end in
//! [`DetailStatus::NotFound`](super::DetailStatus::NotFound); the consumer shows the
//! same "nothing to display" view for all three.
//!
//! If the identifier changes while a lookup is in flight, the old lookup's
//! result is dropped on arrival, whatever order the responses come back in.

use super::actions::Action;
use super::state::DetailState;
use crate::domain::CocktailDetail;
use crate::worker::FetchRequest;

#[derive(Debug, Clone, Default)]
pub struct DetailController {
    state: DetailState,
    seq: u64,
    live_seq: Option<u64>,
}

impl DetailController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &DetailState {
        &self.state
    }

    /// Accepts the identifier from the current route.
    ///
    /// Returns the lookup to dispatch, or `None` when the identifier is the one
    /// already shown or is blank. A blank identifier settles as `NotFound`
    /// without touching the network.
    pub fn set_identifier(&mut self, identifier: &str) -> Option<Action> {
        if self.state.identifier == identifier {
            tracing::trace!(identifier = %identifier, "identifier unchanged");
            return None;
        }

        if let Some(stale) = self.live_seq.take() {
            tracing::debug!(stale_seq = stale, "identifier changed mid-flight, previous lookup invalidated");
        }

        if identifier.trim().is_empty() {
            tracing::debug!("blank identifier, nothing to look up");
            self.state = DetailState::settled(identifier.to_string(), None);
            return None;
        }

        self.seq += 1;
        self.live_seq = Some(self.seq);
        self.state = DetailState::loading(identifier.to_string());

        tracing::debug!(identifier = %identifier, seq = self.seq, "dispatching lookup");

        Some(Action::Dispatch(FetchRequest::lookup(
            self.seq,
            identifier.to_string(),
        )))
    }

    /// Applies a completed lookup. Returns `true` if the snapshot changed.
    pub fn lookup_loaded(
        &mut self,
        seq: u64,
        identifier: &str,
        detail: Option<CocktailDetail>,
    ) -> bool {
        if !self.accept(seq, identifier) {
            return false;
        }

        tracing::debug!(identifier = %identifier, found = detail.is_some(), "lookup settled");
        self.state = DetailState::settled(identifier.to_string(), detail);
        true
    }

    /// Applies a failed lookup as `NotFound`. Returns `true` if the snapshot changed.
    pub fn lookup_failed(&mut self, seq: u64, identifier: &str, message: &str) -> bool {
        if !self.accept(seq, identifier) {
            return false;
        }

        tracing::warn!(identifier = %identifier, error = %message, "lookup failed, showing not found");
        self.state = DetailState::settled(identifier.to_string(), None);
        true
    }

    fn accept(&mut self, seq: u64, identifier: &str) -> bool {
        if self.live_seq == Some(seq) && self.state.identifier == identifier {
            self.live_seq = None;
            true
        } else {
            tracing::debug!(
                seq = seq,
                identifier = %identifier,
                current = %self.state.identifier,
                "stale lookup response discarded"
            );
            false
        }
    }
}
