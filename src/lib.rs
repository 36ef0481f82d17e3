//! cocktaildb: search and browse a remote cocktail catalog.
//!
//! The crate is the fetch layer of a catalog browser plus a small terminal
//! front end:
//! - Debounced name search whose visible state always belongs to the last term
//! - Single-cocktail lookup by identifier with stale-response protection
//! - Normalization of the catalog's loose JSON into strict records
//! - Published state snapshots that renderers consume without any fetch logic

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs): stdin commands, frame printing   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Session runtime (session.rs)                       │  ← event loop
//! │  - serializes events, executes actions              │
//! │  - publishes snapshots over watch channels          │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ App (app/)    │   │ Worker        │   │ UI (ui/)      │
//! │ - controllers │   │ (worker/)     │   │ - view models │
//! │ - events      │   │ - fetch +     │   │ - renderers   │
//! │ - actions     │   │   normalize   │   │ - themes      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                            │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog (catalog/): client trait, HTTP, normalizer │
//! │  Domain (domain/): records, errors                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Search and detail controllers with the event/action model
//! - [`catalog`]: Remote client seam, `reqwest` client and payload normalizer
//! - [`domain`]: Cocktail records and error types
//! - [`infrastructure`]: Platform paths
//! - [`session`]: Async event loop and subscription handle
//! - [`ui`]: Terminal view models, renderers and themes
//! - [`worker`]: Fetch requests, responses and their executor
//! - [`observability`]: OpenTelemetry tracing with file export
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/cocktaildb/config.toml
//! base_url = "https://www.thecocktaildb.com/api/json/v1/1"
//! debounce_ms = 300
//! initial_term = "a"
//! theme = "catppuccin-mocha"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use cocktaildb::{start, Config};
//!
//! # async fn demo() -> cocktaildb::Result<()> {
//! let handle = start(&Config::default())?;
//! let mut search = handle.search_state();
//! search.changed().await.ok();
//! println!("{} results", search.borrow().results.len());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod session;
pub mod ui;
pub mod worker;

pub mod observability;

pub use app::{handle_event, Action, AppState, DetailState, Event, SearchState};
pub use catalog::{CatalogClient, HttpCatalog};
pub use domain::{CatalogError, CocktailDetail, CocktailSummary, Result};
pub use session::{Session, SessionHandle};
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Default search term run when a session starts, so the list is populated.
pub const DEFAULT_INITIAL_TERM: &str = "a";

/// Runtime configuration.
///
/// Sources are layered by the binary: defaults, then the TOML file, then
/// command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog endpoint root. Default: [`catalog::DEFAULT_BASE_URL`]
    pub base_url: String,

    /// Quiet interval before a search is sent. Default: 300
    pub debounce_ms: u64,

    /// Term searched on start. Default: `"a"`
    pub initial_term: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<PathBuf>,

    /// `EnvFilter` directive, e.g. `debug` or `cocktaildb=trace`.
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// OTLP/JSON trace output. Default: `cocktaildb-otlp.json` in the data dir.
    pub trace_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: catalog::DEFAULT_BASE_URL.to_string(),
            debounce_ms: app::DEFAULT_DEBOUNCE.as_millis() as u64,
            initial_term: DEFAULT_INITIAL_TERM.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            trace_file: None,
        }
    }
}

/// On-disk form of [`Config`]; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    debounce_ms: Option<u64>,
    initial_term: Option<String>,
    theme: Option<String>,
    theme_file: Option<PathBuf>,
    trace_level: Option<String>,
    trace_file: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from string key/value pairs.
    ///
    /// Unknown keys are ignored and a value that fails to parse falls back to
    /// its default, so a bad entry never prevents startup.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use cocktaildb::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "150".to_string());
    /// map.insert("initial_term".to_string(), "gin".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.debounce_ms, 150);
    /// assert_eq!(config.initial_term, "gin");
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let debounce_ms = map
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);

        let base_url = map
            .get("base_url")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.base_url, String::from);

        Self {
            base_url,
            debounce_ms,
            initial_term: map
                .get("initial_term")
                .cloned()
                .unwrap_or(defaults.initial_term),
            theme_name: map.get("theme").cloned(),
            theme_file: map.get("theme_file").map(PathBuf::from),
            trace_level: map.get("trace_level").cloned(),
            trace_file: map.get("trace_file").map(PathBuf::from),
        }
    }

    /// Reads a TOML configuration file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Config`] if it is not valid TOML or has unknown keys.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&contents).map_err(|e| {
            CatalogError::Config(format!("invalid config {}: {e}", path.display()))
        })?;

        let defaults = Self::default();
        Ok(Self {
            base_url: file.base_url.unwrap_or(defaults.base_url),
            debounce_ms: file.debounce_ms.unwrap_or(defaults.debounce_ms),
            initial_term: file.initial_term.unwrap_or(defaults.initial_term),
            theme_name: file.theme,
            theme_file: file.theme_file,
            trace_level: file.trace_level,
            trace_file: file.trace_file,
        })
    }

    /// Debounce interval as a `Duration`.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Resolves the theme: file first, then built-in name, then the default.
    ///
    /// An unusable file or unknown name is logged and replaced by the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file.display(), error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the state container described by `config`.
///
/// # Example
///
/// ```rust
/// use cocktaildb::{initialize, Config};
/// use cocktaildb::app::SearchStatus;
///
/// let state = initialize(&Config { debounce_ms: 50, ..Default::default() });
/// assert_eq!(state.search.debounce().as_millis(), 50);
/// assert_eq!(state.search.state().status, SearchStatus::Idle);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        base_url = %config.base_url,
        debounce_ms = config.debounce_ms,
        "initializing cocktaildb"
    );
    AppState::new(config.debounce())
}

/// Spawns a session against the HTTP catalog and submits the initial term.
///
/// Must be called from within a tokio runtime.
///
/// # Errors
///
/// Returns [`CatalogError::Runtime`] if the session stopped before the initial
/// term could be submitted.
pub fn start(config: &Config) -> Result<SessionHandle> {
    start_with_client(config, Arc::new(HttpCatalog::new(config.base_url.clone())))
}

/// Like [`start`], with an injected catalog client.
///
/// # Errors
///
/// Returns [`CatalogError::Runtime`] if the session stopped before the initial
/// term could be submitted.
pub fn start_with_client(config: &Config, client: Arc<dyn CatalogClient>) -> Result<SessionHandle> {
    let handle = Session::spawn(initialize(config), client);
    handle.set_term(config.initial_term.clone())?;
    Ok(handle)
}
