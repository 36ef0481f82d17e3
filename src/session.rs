//! Session runtime: the event loop that drives the controllers.
//!
//! A session owns one [`AppState`] on a dedicated tokio task. User input,
//! elapsed debounce timers and finished fetches all arrive as [`Event`]s on
//! channels and are handled strictly one at a time, so every transition runs
//! to completion before the next starts. Actions returned by the handler are
//! executed as detached tasks that report back through the same loop.
//!
//! Consumers observe state through [`tokio::sync::watch`] receivers. A new
//! snapshot is sent only when the handler reports a change and the value
//! actually differs from the last one published.
//!
//! # Example
//!
//! ```no_run
//! use cocktaildb::app::AppState;
//! use cocktaildb::catalog::HttpCatalog;
//! use cocktaildb::session::Session;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn demo() -> cocktaildb::Result<()> {
//! let client = Arc::new(HttpCatalog::default());
//! let handle = Session::spawn(AppState::new(Duration::from_millis(300)), client);
//!
//! let mut search = handle.search_state();
//! handle.set_term("margarita")?;
//! search.changed().await.ok();
//! println!("{:?}", search.borrow().status);
//! # Ok(())
//! # }
//! ```

use crate::app::{handle_event, Action, AppState, DetailState, Event, SearchState};
use crate::catalog::CatalogClient;
use crate::domain::error::{CatalogError, Result};
use crate::worker::CatalogWorker;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::Instrument;

/// Entry point for starting sessions.
pub struct Session {
    state: AppState,
    worker: CatalogWorker,
    feedback: mpsc::UnboundedSender<Event>,
    search_tx: watch::Sender<SearchState>,
    detail_tx: watch::Sender<DetailState>,
}

impl Session {
    /// Spawns the event loop on the current tokio runtime.
    ///
    /// The loop runs until every [`SessionHandle`] clone has been dropped.
    /// Timers and fetches still pending at that point finish on their own and
    /// their results are discarded.
    #[must_use]
    pub fn spawn(state: AppState, client: Arc<dyn CatalogClient>) -> SessionHandle {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (feedback_tx, feedback_rx) = mpsc::unbounded_channel();
        let (search_tx, search_rx) = watch::channel(state.search.state().clone());
        let (detail_tx, detail_rx) = watch::channel(state.detail.state().clone());

        let session = Self {
            state,
            worker: CatalogWorker::new(client),
            feedback: feedback_tx,
            search_tx,
            detail_tx,
        };

        tokio::spawn(
            session
                .run(input_rx, feedback_rx)
                .instrument(tracing::info_span!("session")),
        );

        SessionHandle {
            inputs: input_tx,
            search: search_rx,
            detail: detail_rx,
        }
    }

    async fn run(
        mut self,
        mut inputs: mpsc::UnboundedReceiver<Event>,
        mut feedback: mpsc::UnboundedReceiver<Event>,
    ) {
        tracing::debug!("session started");

        loop {
            let event = tokio::select! {
                biased;
                Some(event) = feedback.recv() => event,
                input = inputs.recv() => match input {
                    Some(event) => event,
                    None => break,
                },
            };

            let (changed, actions) = handle_event(&mut self.state, &event);
            if changed {
                self.publish();
            }
            for action in actions {
                self.execute(action);
            }
        }

        tracing::debug!("all handles dropped, session stopped");
    }

    fn publish(&self) {
        let search = self.state.search.state();
        self.search_tx.send_if_modified(|current| {
            if current == search {
                return false;
            }
            *current = search.clone();
            true
        });

        let detail = self.state.detail.state();
        self.detail_tx.send_if_modified(|current| {
            if current == detail {
                return false;
            }
            *current = detail.clone();
            true
        });
    }

    fn execute(&self, action: Action) {
        let feedback = self.feedback.clone();

        match action {
            Action::ScheduleDebounce { generation, delay } => {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = feedback.send(Event::DebounceElapsed { generation });
                });
            }
            Action::Dispatch(request) => {
                let worker = self.worker.clone();
                tokio::spawn(async move {
                    let response = worker.handle_message(request).await;
                    let _ = feedback.send(Event::FetchSettled(response));
                });
            }
        }
    }
}

/// Cloneable handle for feeding input to a session and observing its state.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    inputs: mpsc::UnboundedSender<Event>,
    search: watch::Receiver<SearchState>,
    detail: watch::Receiver<DetailState>,
}

impl SessionHandle {
    /// Sets the search term. The fetch follows after the debounce interval.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Runtime`] if the session task has stopped.
    pub fn set_term(&self, term: impl Into<String>) -> Result<()> {
        self.send(Event::TermChanged(term.into()))
    }

    /// Sets the identifier of the cocktail to show in detail.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Runtime`] if the session task has stopped.
    pub fn set_identifier(&self, identifier: impl Into<String>) -> Result<()> {
        self.send(Event::IdentifierChanged(identifier.into()))
    }

    /// Subscribes to search snapshots. The receiver starts at the current one.
    #[must_use]
    pub fn search_state(&self) -> watch::Receiver<SearchState> {
        self.search.clone()
    }

    /// Subscribes to detail snapshots. The receiver starts at the current one.
    #[must_use]
    pub fn detail_state(&self) -> watch::Receiver<DetailState> {
        self.detail.clone()
    }

    fn send(&self, event: Event) -> Result<()> {
        self.inputs
            .send(event)
            .map_err(|_| CatalogError::Runtime("session event loop has stopped".to_string()))
    }
}
