//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the session runtime (`session.rs`) and the
//! catalog/worker layers. The controllers are plain synchronous state machines;
//! everything that waits or does I/O is expressed as an [`Action`] and executed by
//! the runtime.
//!
//! # Architecture
//!
//! ```text
//! Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                      ↑                                  ↓
//!                      └──── Timers / Worker Responses ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the controllers
//! - [`detail`]: Single-cocktail lookup controller
//! - [`handler`]: Event processing and state transition coordinator
//! - [`search`]: Debounced search controller
//! - [`state`]: Published snapshots and the [`AppState`] container
//! - [`status`]: Lifecycle status enums

pub mod actions;
pub mod detail;
pub mod handler;
pub mod search;
pub mod state;
pub mod status;

pub use actions::Action;
pub use detail::DetailController;
pub use handler::{handle_event, Event};
pub use search::{SearchController, DEFAULT_DEBOUNCE};
pub use state::{AppState, DetailState, SearchState};
pub use status::{DetailStatus, SearchStatus};
