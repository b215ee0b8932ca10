//! Command implementations for the pgfind CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod cart;
pub mod completions;
pub mod config;
pub mod fav;
pub mod list;
pub mod lookups;
pub mod show;

use std::env;

use pgfind_api::client::ListingsClient;
use pgfind_local::{CollectionBus, CollectionStore, FileBackend};
use tracing::debug;

use crate::cli::Cli;
use self::config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Listings source error.
    #[error("API error: {0}")]
    Api(#[from] pgfind_api::error::Error),

    /// Collection store error.
    #[error("storage error: {0}")]
    Store(#[from] pgfind_local::CollectionStoreError),

    /// Invalid filter value.
    #[error("filter error: {0}")]
    Filter(#[from] pgfind_local::FilterError),

    /// No listing with the requested name.
    #[error("{}", format_not_found(name, suggestion.as_deref()))]
    NotFound {
        /// The name that was looked up.
        name: String,
        /// A similar name, if one is close enough.
        suggestion: Option<String>,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_not_found(name: &str, suggestion: Option<&str>) -> String {
    match suggestion {
        Some(similar) => format!("listing not found: '{name}'. Did you mean '{similar}'?"),
        None => format!("listing not found: '{name}'"),
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    ///
    /// Colors are off when `--no-color` is given or `NO_COLOR` is set.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && env::var_os("NO_COLOR").is_none(),
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }

    /// Applies config file preferences that flags did not override.
    pub fn apply_config(&mut self, config: &Config) {
        if config.output.color == Some(false) {
            self.use_colors = false;
        }
    }
}

/// Opens the collection store configured for this user.
///
/// Uses `storage.dir` from the config when set, the XDG data directory otherwise.
pub fn open_store(config: &Config) -> Result<CollectionStore> {
    let store = match &config.storage.dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "using configured storage directory");
            CollectionStore::new(FileBackend::with_dir(dir), CollectionBus::new())
        }
        None => CollectionStore::open_default()?,
    };
    Ok(store)
}

/// Builds the listings client with priority: flag/env > config.
pub fn build_client(cli: &Cli, config: &Config) -> Result<ListingsClient> {
    let url = cli
        .source_url
        .clone()
        .or_else(|| config.source.url.clone())
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| {
            CommandError::Config(
                "No listings source configured. Set PGFIND_SOURCE_URL or run 'pgfind config set source.url <url>'".to_string(),
            )
        })?;

    let api_key = cli
        .api_key
        .clone()
        .or_else(|| config.source.api_key.clone())
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            CommandError::Config(
                "No API key configured. Set PGFIND_API_KEY or run 'pgfind config set source.api_key <key>'".to_string(),
            )
        })?;

    let mut builder = ListingsClient::builder(url, api_key);
    if let Some(table) = &config.source.table {
        builder = builder.table(table);
    }
    Ok(builder.build()?)
}
