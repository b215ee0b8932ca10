//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands are split by what they need: nothing but the config file, the
//! local collection store, or the store plus the remote listings source.

use pgfind_api::client::ListingsClient;
use pgfind_local::CollectionStore;

use crate::cli::{CartCommands, Cli, Commands, ConfigCommands, FavCommands, Shell};
use crate::commands::list::ListOptions;
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that touch neither the store nor the source.
pub trait LocalCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that only read or write the local collections.
pub trait StoreCommand {
    fn execute(&self, ctx: &CommandContext, store: &CollectionStore) -> Result<()>;
}

/// Trait for commands that fetch listings from the source.
#[allow(async_fn_in_trait)]
pub trait SourceCommand {
    async fn execute(
        &self,
        ctx: &CommandContext,
        client: &ListingsClient,
        store: &CollectionStore,
    ) -> Result<()>;
}

/// Commands that need no store and no source.
pub enum LocalDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(Shell),
    Help,
}

impl<'a> LocalDispatch<'a> {
    /// Returns None if the command needs the store or the source.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(*shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl LocalCommand for LocalDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(*shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("pgfind - find paying-guest accommodation");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands served from the local collections alone.
pub enum StoreDispatch<'a> {
    FavList,
    FavClear,
    CartList,
    CartRemove { name: &'a str },
    CartClear { force: bool },
}

impl<'a> StoreDispatch<'a> {
    /// Returns None if the command is not a store-only command.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Fav { command }) => match command {
                Some(FavCommands::List) | None => Some(Self::FavList),
                Some(FavCommands::Clear) => Some(Self::FavClear),
                Some(FavCommands::Toggle { .. }) => None,
            },
            Some(Commands::Cart { command }) => match command {
                Some(CartCommands::List) | None => Some(Self::CartList),
                Some(CartCommands::Remove { name }) => Some(Self::CartRemove { name }),
                Some(CartCommands::Clear { force }) => Some(Self::CartClear { force: *force }),
                Some(CartCommands::Add { .. }) => None,
            },
            _ => None,
        }
    }
}

impl StoreCommand for StoreDispatch<'_> {
    fn execute(&self, ctx: &CommandContext, store: &CollectionStore) -> Result<()> {
        match self {
            Self::FavList => commands::fav::execute_list(ctx, store),
            Self::FavClear => commands::fav::execute_clear(ctx, store),
            Self::CartList => commands::cart::execute_list(ctx, store),
            Self::CartRemove { name } => commands::cart::execute_remove(ctx, name, store),
            Self::CartClear { force } => commands::cart::execute_clear(ctx, *force, store),
        }
    }
}

/// Commands that fetch from the listings source.
pub enum SourceDispatch<'a> {
    List(ListOptions),
    Show { name: &'a str },
    FavToggle { name: &'a str },
    CartAdd { name: &'a str },
}

impl<'a> SourceDispatch<'a> {
    /// Returns None if the command does not fetch listings.
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::List {
                search,
                location,
                max_price,
                amenity,
                min_rating,
            }) => Some(Self::List(ListOptions {
                search: search.clone(),
                location: location.clone(),
                max_price: *max_price,
                amenities: amenity.clone(),
                min_rating: *min_rating,
            })),
            Some(Commands::Show { name }) => Some(Self::Show { name }),
            Some(Commands::Fav {
                command: Some(FavCommands::Toggle { name }),
            }) => Some(Self::FavToggle { name }),
            Some(Commands::Cart {
                command: Some(CartCommands::Add { name }),
            }) => Some(Self::CartAdd { name }),
            _ => None,
        }
    }
}

impl SourceCommand for SourceDispatch<'_> {
    async fn execute(
        &self,
        ctx: &CommandContext,
        client: &ListingsClient,
        store: &CollectionStore,
    ) -> Result<()> {
        match self {
            Self::List(opts) => commands::list::execute(ctx, opts, client, store).await,
            Self::Show { name } => commands::show::execute(ctx, name, client, store).await,
            Self::FavToggle { name } => {
                commands::fav::execute_toggle(ctx, name, client, store).await
            }
            Self::CartAdd { name } => commands::cart::execute_add(ctx, name, client, store).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["pgfind"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_local_commands() {
        assert!(LocalDispatch::try_from_cli(&parse(&["config", "path"])).is_some());
        assert!(LocalDispatch::try_from_cli(&parse(&["completions", "zsh"])).is_some());
        assert!(LocalDispatch::try_from_cli(&parse(&[])).is_some());
        assert!(LocalDispatch::try_from_cli(&parse(&["cart"])).is_none());
    }

    #[test]
    fn test_store_commands() {
        assert!(matches!(
            StoreDispatch::try_from_cli(&parse(&["fav"])),
            Some(StoreDispatch::FavList)
        ));
        assert!(matches!(
            StoreDispatch::try_from_cli(&parse(&["cart", "rm", "Sunrise PG"])),
            Some(StoreDispatch::CartRemove { name: "Sunrise PG" })
        ));
        assert!(StoreDispatch::try_from_cli(&parse(&["cart", "add", "Sunrise PG"])).is_none());
        assert!(StoreDispatch::try_from_cli(&parse(&["list"])).is_none());
    }

    #[test]
    fn test_source_commands() {
        assert!(matches!(
            SourceDispatch::from_cli(&parse(&["fav", "toggle", "Sunrise PG"])),
            Some(SourceDispatch::FavToggle { name: "Sunrise PG" })
        ));
        match SourceDispatch::from_cli(&parse(&["list", "-a", "Gym"])) {
            Some(SourceDispatch::List(opts)) => assert_eq!(opts.amenities, vec!["Gym"]),
            _ => panic!("Expected List dispatch"),
        }
        assert!(SourceDispatch::from_cli(&parse(&["cart", "list"])).is_none());
    }

    #[test]
    fn test_every_command_has_a_route() {
        let cases: &[&[&str]] = &[
            &["list"],
            &["show", "x"],
            &["fav", "list"],
            &["fav", "toggle", "x"],
            &["fav", "clear"],
            &["cart", "list"],
            &["cart", "add", "x"],
            &["cart", "remove", "x"],
            &["cart", "clear"],
            &["config", "show"],
            &["completions", "bash"],
        ];
        for args in cases {
            let cli = parse(args);
            let routes = LocalDispatch::try_from_cli(&cli).is_some() as u8
                + StoreDispatch::try_from_cli(&cli).is_some() as u8
                + SourceDispatch::from_cli(&cli).is_some() as u8;
            assert_eq!(routes, 1, "{:?}", args);
        }
    }
}
