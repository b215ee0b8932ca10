//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the pgfind CLI.

use clap::{Parser, Subcommand, ValueEnum};
use pgfind_local::filter::{
    AMENITY_OPTIONS, DEFAULT_MAX_PRICE, LOCATION_OPTIONS, PRICE_SLIDER_MAX, PRICE_SLIDER_MIN,
    PRICE_SLIDER_STEP, RATING_OPTIONS,
};

/// pgfind - Find paying-guest accommodation from the terminal
#[derive(Parser, Debug)]
#[command(name = "pgfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override the listings source URL (default: from config)
    #[arg(long, global = true, env = "PGFIND_SOURCE_URL")]
    pub source_url: Option<String>,

    /// Override the listings API key (default: from config)
    #[arg(long, global = true, env = "PGFIND_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List listings matching the given filters
    #[command(alias = "l")]
    List {
        /// Case-insensitive text the name must contain
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long, help = location_help())]
        location: Option<String>,

        #[arg(short = 'p', long, help = max_price_help())]
        max_price: Option<u64>,

        #[arg(short, long, action = clap::ArgAction::Append, help = amenity_help())]
        amenity: Vec<String>,

        #[arg(short = 'r', long, help = rating_help())]
        min_rating: Option<f64>,
    },

    /// Show listing details
    #[command(alias = "s")]
    Show {
        /// Listing name
        name: String,
    },

    /// Manage favourites
    #[command(alias = "favourites")]
    Fav {
        #[command(subcommand)]
        command: Option<FavCommands>,
    },

    /// Manage the cart
    Cart {
        #[command(subcommand)]
        command: Option<CartCommands>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Favourites subcommands
#[derive(Subcommand, Debug)]
pub enum FavCommands {
    /// List favourites
    List,

    /// Add a listing to favourites, or remove it if already there
    Toggle {
        /// Listing name
        name: String,
    },

    /// Remove every favourite
    Clear,
}

/// Cart subcommands
#[derive(Subcommand, Debug)]
pub enum CartCommands {
    /// List the cart with its estimated total
    List,

    /// Add a listing to the cart
    Add {
        /// Listing name
        name: String,
    },

    /// Remove a listing from the cart
    #[command(alias = "rm")]
    Remove {
        /// Listing name
        name: String,
    },

    /// Empty the cart
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. source.url, output.color)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

/// Shells supported by `completions`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

fn location_help() -> String {
    format!("Location ({}, ...)", LOCATION_OPTIONS.join(", "))
}

fn max_price_help() -> String {
    format!(
        "Maximum monthly price in rupees, {PRICE_SLIDER_MIN}-{PRICE_SLIDER_MAX} in steps of \
         {PRICE_SLIDER_STEP} (default: {DEFAULT_MAX_PRICE})"
    )
}

fn amenity_help() -> String {
    format!("Required amenity, repeatable ({})", AMENITY_OPTIONS.join(", "))
}

fn rating_help() -> String {
    let choices: Vec<String> = RATING_OPTIONS.iter().map(u8::to_string).collect();
    format!("Minimum rating from 0 to 5 (usually {})", choices.join(", "))
}
