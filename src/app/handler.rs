//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only entry point that mutates [`AppState`]. The
//! runtime calls it from one task, one event at a time, so transitions are
//! serialized even though fetches and timers complete concurrently.
//!
//! # Event Types
//!
//! - **Input**: `TermChanged`, `IdentifierChanged`
//! - **Timer**: `DebounceElapsed`
//! - **Worker**: `FetchSettled` with a typed [`FetchResponse`]
//!
//! # Example
//!
//! ```rust
//! use cocktaildb::app::{handle_event, Action, AppState, Event};
//! use std::time::Duration;
//!
//! let mut state = AppState::new(Duration::from_millis(300));
//! let (changed, actions) = handle_event(&mut state, &Event::TermChanged("margarita".into()));
//! assert!(changed);
//! assert!(matches!(actions[0], Action::ScheduleDebounce { .. }));
//! ```

use crate::app::{Action, AppState};
use crate::worker::FetchResponse;

/// Inputs to the state machine: user input, timers and worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user edited the search box.
    TermChanged(String),

    /// Navigation moved to the detail route for this identifier.
    IdentifierChanged(String),

    /// A debounce timer armed for `generation` ran out.
    DebounceElapsed {
        /// Term-change generation the timer was armed for.
        generation: u64,
    },

    /// A worker fetch finished, successfully or not.
    FetchSettled(FetchResponse),
}

/// Processes an event, updates state and returns the actions to execute.
///
/// The returned flag is `true` when a snapshot was replaced and subscribers
/// should be notified. Stale responses and superseded timers yield
/// `(false, vec![])`.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::TermChanged(term) => match state.search.set_term(term) {
            Some(action) => (true, vec![action]),
            None => (false, vec![]),
        },
        Event::IdentifierChanged(identifier) => {
            let before = state.detail.state().clone();
            let actions: Vec<Action> = state.detail.set_identifier(identifier).into_iter().collect();
            (&before != state.detail.state(), actions)
        }
        Event::DebounceElapsed { generation } => {
            let actions: Vec<Action> = state.search.debounce_elapsed(*generation).into_iter().collect();
            (false, actions)
        }
        Event::FetchSettled(response) => {
            tracing::debug!(seq = response.seq(), "worker response received");
            let changed = match response {
                FetchResponse::SearchLoaded { seq, cocktails, .. } => {
                    state.search.search_loaded(*seq, cocktails.clone())
                }
                FetchResponse::SearchFailed { seq, message, .. } => {
                    state.search.search_failed(*seq, message)
                }
                FetchResponse::LookupLoaded { seq, id, detail } => {
                    state.detail.lookup_loaded(*seq, id, detail.clone())
                }
                FetchResponse::LookupFailed { seq, id, message } => {
                    state.detail.lookup_failed(*seq, id, message)
                }
            };
            (changed, vec![])
        }
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::TermChanged(_) => "TermChanged",
        Event::IdentifierChanged(_) => "IdentifierChanged",
        Event::DebounceElapsed { .. } => "DebounceElapsed",
        Event::FetchSettled(FetchResponse::SearchLoaded { .. }) => "SearchLoaded",
        Event::FetchSettled(FetchResponse::SearchFailed { .. }) => "SearchFailed",
        Event::FetchSettled(FetchResponse::LookupLoaded { .. }) => "LookupLoaded",
        Event::FetchSettled(FetchResponse::LookupFailed { .. }) => "LookupFailed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{DetailStatus, SearchStatus};
    use crate::domain::CocktailSummary;
    use crate::worker::FetchRequest;
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(Duration::from_millis(300))
    }

    fn margarita() -> CocktailSummary {
        CocktailSummary {
            id: "11007".to_string(),
            name: "Margarita".to_string(),
            glass_type: "Cocktail glass".to_string(),
            short_description: "Alcoholic".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn term_change_arms_a_timer_and_publishes_loading() {
        let mut state = state();
        let (changed, actions) = handle_event(&mut state, &Event::TermChanged("marg".into()));

        assert!(changed);
        assert_eq!(
            actions,
            vec![Action::ScheduleDebounce {
                generation: 1,
                delay: Duration::from_millis(300)
            }]
        );
        assert_eq!(state.search.state().status, SearchStatus::Loading);
    }

    #[test]
    fn full_search_cycle_through_events() {
        let mut state = state();
        handle_event(&mut state, &Event::TermChanged("marg".into()));

        let (changed, actions) =
            handle_event(&mut state, &Event::DebounceElapsed { generation: 1 });
        assert!(!changed);
        let [Action::Dispatch(FetchRequest::Search { seq, term, .. })] = actions.as_slice() else {
            panic!("expected one search dispatch, got {actions:?}");
        };
        assert_eq!(term, "marg");

        let response = FetchResponse::SearchLoaded {
            seq: *seq,
            term: term.clone(),
            cocktails: vec![margarita()],
        };
        let (changed, actions) = handle_event(&mut state, &Event::FetchSettled(response));
        assert!(changed);
        assert!(actions.is_empty());
        assert_eq!(state.search.state().results, vec![margarita()]);
    }

    #[test]
    fn stale_response_reports_no_change() {
        let mut state = state();
        handle_event(&mut state, &Event::TermChanged("a".into()));
        handle_event(&mut state, &Event::DebounceElapsed { generation: 1 });
        handle_event(&mut state, &Event::TermChanged("b".into()));

        let stale = FetchResponse::SearchLoaded {
            seq: 1,
            term: "a".into(),
            cocktails: vec![margarita()],
        };
        assert_eq!(handle_event(&mut state, &Event::FetchSettled(stale)), (false, vec![]));
        assert_eq!(state.search.state().term, "b");
    }

    #[test]
    fn lookup_failure_collapses_to_not_found() {
        let mut state = state();
        let (changed, actions) =
            handle_event(&mut state, &Event::IdentifierChanged("123".into()));
        assert!(changed);
        assert_eq!(actions.len(), 1);

        let failure = FetchResponse::LookupFailed {
            seq: 1,
            id: "123".into(),
            message: "API Error".into(),
        };
        let (changed, _) = handle_event(&mut state, &Event::FetchSettled(failure));
        assert!(changed);
        assert_eq!(state.detail.state().status, DetailStatus::NotFound);
    }
}
