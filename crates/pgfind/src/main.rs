use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{build_client, open_store, CommandContext, CommandError};
use dispatch::{
    LocalCommand, LocalDispatch, SourceCommand, SourceDispatch, StoreCommand, StoreDispatch,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                let rendered = serde_json::to_string_pretty(&error_json)
                    .unwrap_or_else(|_| error_json.to_string());
                eprintln!("{rendered}");
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `--verbose` logs debug, `--quiet` errors only,
/// and the default is warnings.
fn init_tracing(cli: &Cli) {
    let level = default_log_level(cli);
    let fallback = format!("warn,pgfind={level},pgfind_api={level},pgfind_local={level}");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_log_level(cli: &Cli) -> &'static str {
    if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let mut ctx = CommandContext::from_cli(cli);

    // Config, completions and help work without a readable config file
    if let Some(dispatch) = LocalDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx);
    }

    let config = load_config()?;
    ctx.apply_config(&config);
    let store = open_store(&config)?;

    if let Some(dispatch) = StoreDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx, &store);
    }

    if let Some(dispatch) = SourceDispatch::from_cli(cli) {
        let client = build_client(cli, &config)?;
        return dispatch.execute(&ctx, &client, &store).await;
    }

    Ok(())
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Api(_) => "API_ERROR",
        CommandError::Store(_) => "STORAGE_ERROR",
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::NotFound { .. } => "NOT_FOUND",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Api(api) => ExitCode::from(u8::try_from(api.exit_code()).unwrap_or(2)),
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Store(_) => ExitCode::from(5),
        CommandError::Filter(_) => ExitCode::from(1),
        CommandError::NotFound { .. } => ExitCode::from(4),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}
