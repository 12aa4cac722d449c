//! # Title Warden CLI
//!
//! Command-line interface for validating pull request titles.
//!
//! This binary wraps the Title Warden engine so that a CI job can validate a
//! pull request title and fail when the title breaks the convention.
//!
//! # Commands
//!
//! - `check` - Validate a pull request title
//! - `config` - Manage configuration files and settings
//!
//! # Examples
//!
//! ```bash
//! # Check a title, reading node display names from a file
//! title-warden check "feat(Mattermost Node): Add new resource" --names-file names.json
//!
//! # Initialize configuration
//! title-warden config init
//! ```

use std::process::{ExitCode, Termination};

use clap::{Parser, Subcommand};
use tracing::{debug, error};

/// Command implementations for the CLI.
mod commands;

/// Configuration management for the CLI.
mod config;

/// Error types specific to the CLI.
mod errors;

/// Display name providers backed by files and commands.
mod providers;

use commands::{check_title::CheckTitleArgs, config_cmd::ConfigCommands};
use errors::CliError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
const LOG_ENV_VAR: &str = "TITLE_WARDEN_LOG";

/// Command-line interface structure for Title Warden.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available commands for the Title Warden CLI.
#[derive(Subcommand)]
enum Commands {
    /// Validate a pull request title
    Check(CheckTitleArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Main entry point for the Title Warden CLI.
///
/// Exits with 0 when the command succeeds and with the code belonging to the
/// [`CliError`] otherwise, e.g. 1 when the title failed validation.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so that stdout only carries the validation output
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    if cli.verbose {
        debug!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Check(args) => commands::check_title::execute(args).await,
        Commands::Config(cmd) => commands::config_cmd::execute(cmd).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !matches!(e, CliError::ValidationFailed(_)) {
                error!("Error executing command: {}", e);
                eprintln!("{}", e);
            }
            e.report()
        }
    }
}
