//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/pgfind/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Minimum key length to apply masking (show first and last N characters).
const KEY_MASK_MIN_LENGTH: usize = 8;

/// Number of characters to show at start/end of a masked key.
const KEY_MASK_VISIBLE_CHARS: usize = 4;

/// Keys accepted by `config set`.
const VALID_KEYS: &str = "source.url, source.api_key, source.table, storage.dir, output.color";

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Listings source settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Local collection storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            source: SourceConfig::default(),
            storage: StorageConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Listings source configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Project URL of the REST endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// API key (can also use PGFIND_API_KEY env var).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Table holding the listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

/// Storage configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding favourites and cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config file path.
///
/// `PGFIND_CONFIG` wins, then `$XDG_CONFIG_HOME/pgfind/config.toml`, then
/// `~/.config/pgfind/config.toml` on all platforms.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("PGFIND_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("pgfind")
    } else {
        BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".config").join("pgfind"))
            .ok_or_else(|| {
                CommandError::Config("Could not determine config directory".to_string())
            })?
    };

    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
///
/// A missing file yields the default configuration.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    // Version 1 is the initial schema
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk, creating the directory if needed.
fn save_config(config: &Config) -> Result<PathBuf> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(path)
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": {
                "version": config.version,
                "source": {
                    "url": config.source.url,
                    "api_key": config.source.api_key.as_deref().map(mask_key),
                    "table": config.source.table,
                },
                "storage": config.storage,
                "output": config.output,
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("[source]");
            if let Some(ref url) = config.source.url {
                println!("  url: {}", url);
            }
            if let Some(ref key) = config.source.api_key {
                println!("  api_key: {}", mask_key(key));
            }
            if let Some(ref table) = config.source.table {
                println!("  table: {}", table);
            }

            println!("\n[storage]");
            if let Some(ref dir) = config.storage.dir {
                println!("  dir: {}", dir.display());
            }

            println!("\n[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }
        } else {
            println!("(No config file exists. Run 'pgfind config set <key> <value>' to create one.)");
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies a `section.field` assignment to the config.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "source.url" => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(CommandError::Config(format!(
                    "Invalid source.url '{}'. Expected an http(s) URL",
                    value
                )));
            }
            config.source.url = Some(value.to_string());
        }
        "source.api_key" => config.source.api_key = Some(value.to_string()),
        "source.table" => config.source.table = Some(value.to_string()),
        "storage.dir" => config.storage.dir = Some(PathBuf::from(value)),
        "output.color" => config.output.color = Some(parse_bool(value)?),
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: {}",
                key, VALID_KEYS
            )));
        }
    }
    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    apply_setting(&mut config, &opts.key, &opts.value)?;
    let path = save_config(&config)?;

    let shown = if opts.key == "source.api_key" {
        mask_key(&opts.value)
    } else {
        opts.value.clone()
    };

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": shown,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, shown);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Masks a key for display, showing only the first and last N characters.
///
/// Uses character-based (not byte-based) indexing to safely handle
/// multi-byte UTF-8 characters.
fn mask_key(key: &str) -> String {
    let char_count = key.chars().count();
    if char_count > KEY_MASK_MIN_LENGTH {
        let prefix: String = key.chars().take(KEY_MASK_VISIBLE_CHARS).collect();
        let suffix: String = key
            .chars()
            .skip(char_count - KEY_MASK_VISIBLE_CHARS)
            .collect();
        format!("{}...{}", prefix, suffix)
    } else {
        "****".to_string()
    }
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}
