//! Side effects requested by the controllers.
//!
//! The event handler never sleeps or touches the network. It returns
//! [`Action`]s and the session runtime carries them out, feeding the outcome
//! back in as a new event.
//!
//! # Example
//!
//! ```rust
//! use cocktaildb::app::Action;
//! use cocktaildb::worker::FetchRequest;
//! use std::time::Duration;
//!
//! let actions = vec![
//!     Action::ScheduleDebounce { generation: 1, delay: Duration::from_millis(300) },
//!     Action::Dispatch(FetchRequest::lookup(1, "11007".to_string())),
//! ];
//! ```

use crate::worker::FetchRequest;
use std::time::Duration;

/// Commands executed by the session runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Arms a one-shot timer that reports back as `Event::DebounceElapsed`.
    ///
    /// Timers are never cancelled; a timer from a superseded generation is
    /// ignored when it fires.
    ScheduleDebounce {
        /// Term-change generation the timer belongs to.
        generation: u64,
        /// Quiet interval to wait.
        delay: Duration,
    },

    /// Hands a fetch to the worker. Its response comes back as
    /// `Event::FetchSettled`.
    Dispatch(FetchRequest),
}
