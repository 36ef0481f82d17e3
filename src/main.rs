//! Terminal front end for the cocktail catalog.
//!
//! Reads one command per line from stdin and prints a fresh frame every time
//! the session publishes a new snapshot.
//!
//! # Commands
//!
//! - any text: search by name (an empty line searches for `""`)
//! - `/cocktail/<id>` or `:open <id>`: show one cocktail
//! - `:q`: quit
//!
//! # Configuration
//!
//! The TOML file from `--config` (or the platform default path, if present)
//! is read first; flags override its values.

use clap::Parser;
use cocktaildb::domain::cocktail::identifier_from_route;
use cocktaildb::infrastructure::paths;
use cocktaildb::ui::{render_detail, render_search};
use cocktaildb::{observability, CatalogError, Config, SessionHandle, Theme};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Debug, Parser)]
#[command(name = "cocktaildb", version, about = "Search and browse the cocktail catalog")]
struct Cli {
    /// Configuration file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog endpoint root.
    #[arg(long)]
    base_url: Option<String>,

    /// Quiet interval before a search is sent, in milliseconds.
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Term searched on start.
    #[arg(long)]
    term: Option<String>,

    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`, `plain`).
    #[arg(long)]
    theme: Option<String>,

    /// Tracing filter directive, e.g. `debug`.
    #[arg(long)]
    trace_level: Option<String>,

    /// OTLP/JSON trace output file.
    #[arg(long)]
    trace_file: Option<PathBuf>,
}

/// One parsed stdin line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Open(String),
    Quit,
}

impl Command {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed == ":q" {
            return Self::Quit;
        }
        if let Some(id) = trimmed.strip_prefix(":open") {
            return Self::Open(id.trim().to_string());
        }
        if let Some(id) = identifier_from_route(trimmed) {
            return Self::Open(id.to_string());
        }
        Self::Search(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn load_config(cli: &Cli) -> cocktaildb::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => {
            let path = paths::default_config_path();
            if path.exists() {
                Config::from_file(path)?
            } else {
                Config::default()
            }
        }
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    if let Some(debounce_ms) = cli.debounce_ms {
        config.debounce_ms = debounce_ms;
    }
    if let Some(term) = &cli.term {
        config.initial_term.clone_from(term);
    }
    if cli.theme.is_some() {
        config.theme_name.clone_from(&cli.theme);
        config.theme_file = None;
    }
    if cli.trace_level.is_some() {
        config.trace_level.clone_from(&cli.trace_level);
    }
    if cli.trace_file.is_some() {
        config.trace_file.clone_from(&cli.trace_file);
    }

    Ok(config)
}

/// Prints a frame whenever either snapshot changes. Ends when the session stops.
async fn render_loop(handle: SessionHandle, theme: Theme) {
    let mut search = handle.search_state();
    let mut detail = handle.detail_state();
    drop(handle);
    let mut stdout = tokio::io::stdout();

    loop {
        let frame = tokio::select! {
            changed = search.changed() => match changed {
                Ok(()) => render_search(&search.borrow_and_update(), &theme),
                Err(_) => break,
            },
            changed = detail.changed() => match changed {
                Ok(()) => render_detail(&detail.borrow_and_update(), &theme),
                Err(_) => break,
            },
        };

        if stdout.write_all(format!("\n{frame}").as_bytes()).await.is_err() {
            break;
        }
        let _ = stdout.flush().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), CatalogError> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let _tracing = observability::init_tracing(&config)
        .inspect_err(|e| eprintln!("tracing disabled: {e}"))
        .ok();

    tracing::info!(base_url = %config.base_url, "starting cocktaildb");

    let handle = cocktaildb::start(&config)?;
    let renderer = tokio::spawn(render_loop(handle.clone(), config.theme()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Search(term) => handle.set_term(term)?,
            Command::Open(id) => handle.set_identifier(id)?,
        }
    }

    tracing::info!("shutting down");
    drop(handle);
    renderer.abort();
    Ok(())
}
