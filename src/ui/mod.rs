//! Terminal presentation: view models, renderers and themes.
//!
//! Rendering is a pure function of a published snapshot:
//!
//! ```text
//! watch::Receiver<SearchState> → ListViewModel   → render_search → frame
//! watch::Receiver<DetailState> → DetailViewModel → render_detail → frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready view models computed from state snapshots
//! - [`renderer`]: Frame renderers
//! - [`theme`]: Color palettes and ANSI escape sequence generation

pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render_detail, render_search};
pub use theme::Theme;
pub use viewmodel::{DetailViewModel, ListViewModel};
